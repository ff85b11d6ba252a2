use climind_core::models::scores::{
    collapse, personal_values_10, personal_values_19, DataProperties, DataValue, PoliticalValue,
};
use climind_core::vocabulary::{PERSONAL_VALUES_10, PERSONAL_VALUES_19};
use climind_core::DomainError;
use proptest::prelude::*;

fn data(pairs: &[(&str, Option<f64>)]) -> DataProperties {
    pairs.iter().map(|(k, v)| (k.to_string(), DataValue::from(*v))).collect()
}

#[test]
fn collapse_all_unset_is_unset() {
    assert_eq!(collapse(&[None, None]).unwrap(), None);
    assert_eq!(collapse(&[]).unwrap(), None);
}

#[test]
fn collapse_one_wins_over_zero_and_unset() {
    assert_eq!(collapse(&[Some(1.0), Some(0.0), None]).unwrap(), Some(1.0));
}

#[test]
fn collapse_negative_one_without_one() {
    assert_eq!(collapse(&[Some(0.0), Some(-1.0)]).unwrap(), Some(-1.0));
}

#[test]
fn collapse_zeroes_and_unset_is_zero() {
    assert_eq!(collapse(&[Some(0.0), None]).unwrap(), Some(0.0));
}

#[test]
fn collapse_opposing_values_fail() {
    let err = collapse(&[Some(1.0), Some(-1.0), None]).unwrap_err();
    assert!(matches!(err, DomainError::OpposingScores { .. }));
}

#[test]
fn vectors_have_fixed_lengths_for_empty_data() {
    let empty = DataProperties::new();
    assert_eq!(personal_values_19(&empty).len(), 19);
    let ten = personal_values_10(&empty, "n").unwrap();
    assert_eq!(ten.len(), 10);
    assert!(ten.iter().all(Option::is_none));
}

#[test]
fn groups_collapse_in_fixed_order() {
    let d = data(&[
        ("achievement", Some(0.0)),
        ("benevolence_dependability", Some(1.0)),
        ("face", Some(1.0)),
        ("power_dominance", Some(-1.0)),
        ("power_resources", Some(0.0)),
        ("tradition", Some(1.0)),
        ("universalism_nature", Some(0.0)),
    ]);
    let nineteen = personal_values_19(&d);
    assert_eq!(nineteen[0], Some(0.0));
    assert_eq!(nineteen[2], Some(1.0));
    assert_eq!(nineteen[5], Some(1.0)); // face
    assert_eq!(nineteen[8], Some(-1.0));

    let ten = personal_values_10(&d, "n").unwrap();
    assert_eq!(
        ten,
        [
            Some(0.0),  // achievement
            Some(1.0),  // benevolence
            None,       // conformity
            None,       // hedonism
            Some(-1.0), // power
            None,       // security
            None,       // self-direction
            None,       // stimulation
            Some(1.0),  // tradition
            Some(0.0),  // universalism
        ]
    );
}

#[test]
fn singleton_groups_copy_the_raw_value() {
    let d = data(&[("hedonism", Some(0.5))]);
    assert_eq!(personal_values_10(&d, "n").unwrap()[3], Some(0.5));
}

#[test]
fn opposing_group_names_node_and_group() {
    let d = data(&[
        ("security_personal", Some(1.0)),
        ("security_societal", Some(-1.0)),
    ]);
    let err = personal_values_10(&d, "heat wave").unwrap_err();
    assert_eq!(
        err,
        DomainError::OpposingValues {
            node: "heat wave".to_string(),
            group: "security".to_string(),
        }
    );
}

#[test]
fn political_value_is_conservative_then_liberal() {
    let d = data(&[("conservative", Some(1.0)), ("liberal", Some(-1.0))]);
    let pv = PoliticalValue::from_data(&d, "conservative", "liberal");
    assert_eq!(pv.as_array(), [Some(1.0), Some(-1.0)]);
    let json = serde_json::to_string(&pv).unwrap();
    assert_eq!(json, "[1.0,-1.0]");
}

#[test]
fn non_numeric_data_reads_as_unset() {
    let mut d = data(&[("achievement", Some(1.0))]);
    d.insert("hedonism".to_string(), DataValue::from("often"));
    d.insert("tradition".to_string(), DataValue::from(true));
    let values = personal_values_19(&d);
    assert_eq!(values[0], Some(1.0));
    assert_eq!(values[6], None);
    assert_eq!(values[15], None);
}

#[test]
fn data_values_accept_any_json_scalar() {
    let d: DataProperties = serde_json::from_str(
        r#"{"CO2_eq_reduced": 5, "schema_note": "text", "reviewed": false, "myth_frequency": null}"#,
    )
    .unwrap();
    assert_eq!(d["CO2_eq_reduced"], DataValue::Number(5.0));
    assert_eq!(d["schema_note"], DataValue::Text("text".to_string()));
    assert_eq!(d["reviewed"], DataValue::Bool(false));
    assert_eq!(d["myth_frequency"], DataValue::Null);

    let back: DataProperties = serde_json::from_str(&serde_json::to_string(&d).unwrap()).unwrap();
    assert_eq!(back, d);
}

#[test]
fn table_sizes_are_fixed() {
    assert_eq!(PERSONAL_VALUES_19.len(), climind_core::constants::PERSONAL_VALUES_19_LEN);
    assert_eq!(PERSONAL_VALUES_10.len(), climind_core::constants::PERSONAL_VALUES_10_LEN);
}

fn tri_state() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), Just(Some(0.0)), Just(Some(1.0)), Just(Some(-1.0))]
}

proptest! {
    #[test]
    fn collapse_matches_precedence(values in prop::collection::vec(tri_state(), 0..8)) {
        let has_one = values.contains(&Some(1.0));
        let has_neg = values.contains(&Some(-1.0));
        let result = collapse(&values);
        if has_one && has_neg {
            prop_assert!(result.is_err());
        } else if values.iter().all(Option::is_none) {
            prop_assert_eq!(result.unwrap(), None);
        } else if has_one {
            prop_assert_eq!(result.unwrap(), Some(1.0));
        } else if has_neg {
            prop_assert_eq!(result.unwrap(), Some(-1.0));
        } else {
            prop_assert_eq!(result.unwrap(), Some(0.0));
        }
    }
}
