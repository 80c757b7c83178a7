use pretty_assertions::assert_eq;
use squall::ast::builders::{col, lit};
use squall::ast::{KsqlValue, StreamQuery};
use squall::schema::{EntitySchema, FieldSchema, KsqlEntity, KsqlType};
use squall::statements::create::{
    create_or_replace_table, create_statement, create_stream, create_table,
};
use squall::statements::insert::insert_statement;
use squall::statements::{
    CreationType, EntityCreationMetadata, InsertProperties, KsqlEntityType, StatementContext,
};

struct Location {
    latitude: String,
    longitude: f64,
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

struct Movie {
    title: String,
    id: i32,
    release_year: i32,
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

fn my_movie_schema() -> EntitySchema {
    EntitySchema::new(
        "MyMovie",
        vec![
            FieldSchema::new("Id", KsqlType::Int).key(),
            FieldSchema::new("Title", KsqlType::Varchar),
            FieldSchema::new("Release_Year", KsqlType::Int),
        ],
    )
}

fn my_movie_metadata() -> EntityCreationMetadata {
    EntityCreationMetadata {
        replicas: Some(1),
        ..EntityCreationMetadata::new("MyMovie")
    }
}

#[test]
fn test_select_with_limit_over_location_stream() {
    let ksql = StreamQuery::<Location>::new().take(2).to_query_string().unwrap();

    assert_eq!(ksql, "SELECT * FROM Locations EMIT CHANGES LIMIT 2;");
}

#[test]
fn test_where_clause_precedence_over_location_stream() {
    let ksql = StreamQuery::<Location>::new()
        .where_(
            col("Latitude")
                .eq(lit("1"))
                .or(col("Latitude").ne(lit("2")).and(col("Latitude").eq(lit("3")))),
        )
        .to_query_string()
        .unwrap();

    assert_eq!(
        ksql,
        "SELECT * FROM Locations\nWHERE (Latitude = '1') OR ((Latitude != '2') AND (Latitude = '3')) EMIT CHANGES;"
    );
}

#[test]
fn test_create_table_for_my_movie() {
    let statement = create_table(&my_movie_schema(), &my_movie_metadata(), false).unwrap();

    assert_eq!(
        statement,
        "CREATE TABLE MyMovies (\n\tId INT PRIMARY KEY,\n\tTitle VARCHAR,\n\tRelease_Year INT\n) WITH ( KAFKA_TOPIC='MyMovie', VALUE_FORMAT='Json', PARTITIONS='1', REPLICAS='1' );"
    );
}

#[test]
fn test_create_stream_uses_key_instead_of_primary_key() {
    let statement = create_stream(&my_movie_schema(), &my_movie_metadata(), false).unwrap();

    assert_eq!(
        statement,
        "CREATE STREAM MyMovies (\n\tId INT KEY,\n\tTitle VARCHAR,\n\tRelease_Year INT\n) WITH ( KAFKA_TOPIC='MyMovie', VALUE_FORMAT='Json', PARTITIONS='1', REPLICAS='1' );"
    );
}

#[test]
fn test_create_table_if_not_exists() {
    let statement = create_table(&my_movie_schema(), &my_movie_metadata(), true).unwrap();

    assert!(statement.starts_with("CREATE TABLE IF NOT EXISTS MyMovies (\n\t"));
}

#[test]
fn test_create_or_replace_table() {
    let statement = create_or_replace_table(&my_movie_schema(), &my_movie_metadata()).unwrap();

    assert!(statement.starts_with("CREATE OR REPLACE TABLE MyMovies (\n\t"));
}

#[test]
fn test_create_statement_keeps_entity_name_when_pluralization_is_disabled() {
    let metadata = EntityCreationMetadata {
        should_pluralize_entity_name: false,
        ..my_movie_metadata()
    };
    let context = StatementContext {
        creation_type: CreationType::Create,
        entity_type: KsqlEntityType::Table,
    };

    let statement = create_statement(&my_movie_schema(), &context, &metadata, false).unwrap();

    assert!(statement.starts_with("CREATE TABLE MyMovie (\n\t"));
}

#[test]
fn test_create_statement_entity_name_override() {
    let metadata = EntityCreationMetadata {
        entity_name: Some("TestName".to_string()),
        ..my_movie_metadata()
    };

    let statement = create_stream(&my_movie_schema(), &metadata, false).unwrap();

    assert!(statement.starts_with("CREATE STREAM TestNames (\n\t"));
}

#[test]
fn test_create_statement_omits_replicas_when_not_provided() {
    let metadata = EntityCreationMetadata::new("enrichedevents");

    let statement = create_stream(&my_movie_schema(), &metadata, false).unwrap();

    assert!(statement.ends_with(
        ") WITH ( KAFKA_TOPIC='enrichedevents', VALUE_FORMAT='Json', PARTITIONS='1' );"
    ));
}

#[test]
fn test_create_statement_skips_read_only_fields_by_default() {
    let schema = EntitySchema::new(
        "MyItem",
        vec![
            FieldSchema::new("Id", KsqlType::Int).key(),
            FieldSchema::new("Computed", KsqlType::Varchar).read_only(),
        ],
    );
    let metadata = my_movie_metadata();

    let statement = create_table(&schema, &metadata, false).unwrap();
    assert!(!statement.contains("Computed"));

    let metadata = EntityCreationMetadata {
        include_read_only_fields: true,
        ..metadata
    };

    let statement = create_table(&schema, &metadata, false).unwrap();
    assert!(statement.contains("\tComputed VARCHAR"));
}

#[test]
fn test_create_statement_uses_rename_override_verbatim() {
    let schema = EntitySchema::new(
        "Renamed",
        vec![FieldSchema::new("DataId", KsqlType::Varchar).renamed("data_id")],
    );
    let metadata = EntityCreationMetadata {
        should_pluralize_entity_name: false,
        ..EntityCreationMetadata::new("Renamed_values")
    };

    let statement = create_stream(&schema, &metadata, false).unwrap();

    assert_eq!(
        statement,
        "CREATE STREAM Renamed (\n\tdata_id VARCHAR\n) WITH ( KAFKA_TOPIC='Renamed_values', VALUE_FORMAT='Json', PARTITIONS='1' );"
    );
}

#[test]
fn test_create_statement_expands_nested_records() {
    let schema = EntitySchema::new(
        "Enrichedevent",
        vec![
            FieldSchema::new("Key", KsqlType::Varchar).key(),
            FieldSchema::new(
                "EventCategories",
                KsqlType::Array(Box::new(KsqlType::Struct(vec![
                    ("Id".to_string(), KsqlType::Int),
                    ("Name".to_string(), KsqlType::Varchar),
                ]))),
            ),
        ],
    );
    let metadata = EntityCreationMetadata::new("enrichedevents");

    let statement = create_table(&schema, &metadata, true).unwrap();

    assert_eq!(
        statement,
        "CREATE TABLE IF NOT EXISTS Enrichedevents (\n\tKey VARCHAR PRIMARY KEY,\n\tEventCategories ARRAY<STRUCT<Id INT, Name VARCHAR>>\n) WITH ( KAFKA_TOPIC='enrichedevents', VALUE_FORMAT='Json', PARTITIONS='1' );"
    );
}

#[test]
fn test_create_stream_with_decimal_precision() {
    let schema = EntitySchema::new(
        "Transaction",
        vec![FieldSchema::new("Amount", KsqlType::Decimal(Some((3, 2))))],
    );

    let statement = create_stream(&schema, &my_movie_metadata(), false).unwrap();

    assert_eq!(
        statement,
        "CREATE STREAM Transactions (\n\tAmount DECIMAL(3,2)\n) WITH ( KAFKA_TOPIC='MyMovie', VALUE_FORMAT='Json', PARTITIONS='1', REPLICAS='1' );"
    );
}

#[test]
fn test_create_stream_with_header_column() {
    let schema = EntitySchema::new(
        "Message",
        vec![
            FieldSchema::new("Id", KsqlType::Int).key(),
            FieldSchema::new("Raw", KsqlType::Bytes).header("abc"),
        ],
    );
    let metadata = EntityCreationMetadata::new("messages");

    let statement = create_stream(&schema, &metadata, false).unwrap();

    assert_eq!(
        statement,
        "CREATE STREAM Messages (\n\tId INT KEY,\n\tRaw BYTES HEADER('abc')\n) WITH ( KAFKA_TOPIC='messages', VALUE_FORMAT='Json', PARTITIONS='1' );"
    );
}

#[test]
fn test_insert_statement_for_movie() {
    let movie = Movie {
        title: "Title".to_string(),
        id: 1,
        release_year: 1988,
    };

    let statement = insert_statement(&movie, &InsertProperties::default()).unwrap();

    assert_eq!(
        statement,
        "INSERT INTO Movies (Title, Id, Release_Year) VALUES ('Title', 1, 1988);"
    );
}

#[test]
fn test_insert_statement_name_override_without_pluralization() {
    let movie = Movie {
        title: "Title".to_string(),
        id: 1,
        release_year: 1988,
    };
    let properties = InsertProperties {
        entity_name: Some("MovieTopic".to_string()),
        should_pluralize_entity_name: false,
        ..InsertProperties::default()
    };

    let statement = insert_statement(&movie, &properties).unwrap();

    assert!(statement.starts_with("INSERT INTO MovieTopic ("));
}

#[test]
fn test_insert_statement_declared_field_subset() {
    let movie = Movie {
        title: "Title".to_string(),
        id: 1,
        release_year: 1988,
    };
    let properties = InsertProperties {
        declared_fields: Some(vec!["Id".to_string(), "Title".to_string()]),
        ..InsertProperties::default()
    };

    let statement = insert_statement(&movie, &properties).unwrap();

    assert_eq!(statement, "INSERT INTO Movies (Id, Title) VALUES (1, 'Title');");
}

#[test]
fn test_insert_statement_instance_type_ignores_declared_subset() {
    let movie = Movie {
        title: "Title".to_string(),
        id: 1,
        release_year: 1988,
    };
    let properties = InsertProperties {
        use_instance_type: true,
        declared_fields: Some(vec!["Id".to_string()]),
        ..InsertProperties::default()
    };

    let statement = insert_statement(&movie, &properties).unwrap();

    assert_eq!(
        statement,
        "INSERT INTO Movies (Title, Id, Release_Year) VALUES ('Title', 1, 1988);"
    );
}

#[test]
fn test_insert_statement_rejects_unknown_declared_field() {
    let movie = Movie {
        title: "Title".to_string(),
        id: 1,
        release_year: 1988,
    };
    let properties = InsertProperties {
        declared_fields: Some(vec!["Missing".to_string()]),
        ..InsertProperties::default()
    };

    assert!(insert_statement(&movie, &properties).is_err());
}

#[test]
fn test_insert_statement_string_quotes_are_not_escaped() {
    let location = Location {
        latitude: "it's north".to_string(),
        longitude: 1.5,
    };

    let statement = insert_statement(&location, &InsertProperties::default()).unwrap();

    assert_eq!(
        statement,
        "INSERT INTO Locations (Latitude, Longitude) VALUES ('it's north', 1.5);"
    );
}

#[test]
fn test_compilation_is_stateless_across_generators() {
    let ddl_once = create_table(&my_movie_schema(), &my_movie_metadata(), false).unwrap();
    let ddl_twice = create_table(&my_movie_schema(), &my_movie_metadata(), false).unwrap();
    assert_eq!(ddl_once, ddl_twice);

    let movie = Movie {
        title: "Title".to_string(),
        id: 1,
        release_year: 1988,
    };
    assert_eq!(
        insert_statement(&movie, &InsertProperties::default()).unwrap(),
        insert_statement(&movie, &InsertProperties::default()).unwrap()
    );
}
