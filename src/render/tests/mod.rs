//! Query generation tests.

mod windows;

/// Shared test entities.
pub(crate) mod fixtures {
    use crate::ast::KsqlValue;
    use crate::schema::{EntitySchema, FieldSchema, KsqlEntity, KsqlType};

    pub struct Location {
        pub latitude: String,
        pub longitude: f64,
    }

    impl KsqlEntity for Location {
        fn schema() -> EntitySchema {
            EntitySchema::new(
                "Location",
                vec![
                    FieldSchema::new("Latitude", KsqlType::Varchar),
                    FieldSchema::new("Longitude", KsqlType::Double),
                ],
            )
        }

        fn row(&self) -> Vec<KsqlValue> {
            vec![
                KsqlValue::String(self.latitude.clone()),
                KsqlValue::Double(self.longitude),
            ]
        }
    }

    pub struct Movie {
        pub title: String,
        pub id: i32,
        pub release_year: i32,
    }

    impl KsqlEntity for Movie {
        fn schema() -> EntitySchema {
            EntitySchema::new(
                "Movie",
                vec![
                    FieldSchema::new("Title", KsqlType::Varchar),
                    FieldSchema::new("Id", KsqlType::Int).key(),
                    FieldSchema::new("Release_Year", KsqlType::Int),
                ],
            )
        }

        fn row(&self) -> Vec<KsqlValue> {
            vec![
                KsqlValue::String(self.title.clone()),
                KsqlValue::Int(self.id),
                KsqlValue::Int(self.release_year),
            ]
        }
    }

    pub struct LeadActor {
        pub title: String,
        pub name: String,
    }

    impl KsqlEntity for LeadActor {
        fn schema() -> EntitySchema {
            EntitySchema::new(
                "LeadActor",
                vec![
                    FieldSchema::new("Title", KsqlType::Varchar),
                    FieldSchema::new("Name", KsqlType::Varchar),
                ],
            )
        }

        fn row(&self) -> Vec<KsqlValue> {
            vec![
                KsqlValue::String(self.title.clone()),
                KsqlValue::String(self.name.clone()),
            ]
        }
    }

    pub struct Order {
        pub order_id: i32,
        pub title: String,
    }

    impl KsqlEntity for Order {
        fn schema() -> EntitySchema {
            EntitySchema::new(
                "Order",
                vec![
                    FieldSchema::new("OrderId", KsqlType::Int).key(),
                    FieldSchema::new("Title", KsqlType::Varchar),
                ],
            )
        }

        fn row(&self) -> Vec<KsqlValue> {
            vec![
                KsqlValue::Int(self.order_id),
                KsqlValue::String(self.title.clone()),
            ]
        }
    }

    pub struct IoTSensorStats {
        pub sensor_id: String,
        pub avg_value: f64,
    }

    impl KsqlEntity for IoTSensorStats {
        fn schema() -> EntitySchema {
            EntitySchema::new(
                "IoTSensorStats",
                vec![
                    FieldSchema::new("SensorId", KsqlType::Varchar).key(),
                    FieldSchema::new("AvgValue", KsqlType::Double),
                ],
            )
        }

        fn row(&self) -> Vec<KsqlValue> {
            vec![
                KsqlValue::String(self.sensor_id.clone()),
                KsqlValue::Double(self.avg_value),
            ]
        }
    }
}
