//! Built-in demo dataset shown before any file is opened.

use crate::types::{Column, DataOrigin, DataType, DynamicValue, Row, TableSource};

fn details(age: i64, city: &str, zip: i64, hobbies: [&str; 2]) -> DynamicValue {
    DynamicValue::Mapping(vec![
        ("Age".into(), DynamicValue::Integer(age)),
        (
            "Address".into(),
            DynamicValue::Mapping(vec![
                ("City".into(), DynamicValue::Text(city.into())),
                ("ZIP".into(), DynamicValue::Integer(zip)),
            ]),
        ),
        (
            "Hobbies".into(),
            DynamicValue::Sequence(
                hobbies
                    .iter()
                    .map(|h| DynamicValue::Text((*h).into()))
                    .collect(),
            ),
        ),
    ])
}

/// Two demo rows with nested details, matching the shape the card view
/// is built to show off.
pub fn sample_table() -> TableSource {
    TableSource {
        name: "Sample".to_string(),
        columns: vec![
            Column::new("Name", DataType::Text),
            Column::new("Details", DataType::Nested),
        ],
        rows: vec![
            Row::new(vec![
                DynamicValue::Text("Alice".into()),
                details(25, "New York", 10001, ["Reading", "Cycling"]),
            ]),
            Row::new(vec![
                DynamicValue::Text("Bob".into()),
                details(30, "San Francisco", 94105, ["Gaming", "Traveling"]),
            ]),
        ],
        origin: DataOrigin::Sample,
    }
}
