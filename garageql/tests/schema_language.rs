use color_eyre::Result;
use garageql::schema;
use graphql_parser::schema::{parse_schema, Definition, Document, ObjectType, TypeDefinition};

fn object<'a, 'd>(doc: &'a Document<'d, String>, type_name: &str) -> &'a ObjectType<'d, String> {
    doc.definitions
        .iter()
        .find_map(|def| match def {
            Definition::TypeDefinition(TypeDefinition::Object(obj)) if obj.name == type_name => {
                Some(obj)
            }
            _ => None,
        })
        .unwrap_or_else(|| panic!("type `{}` missing from schema", type_name))
}

/// `field(arg: Type, ...): Type` signatures of an object type, sorted.
fn signatures(doc: &Document<'_, String>, type_name: &str) -> Vec<String> {
    let object = object(doc, type_name);
    let mut signatures: Vec<String> = object
        .fields
        .iter()
        .map(|field| {
            let mut args: Vec<String> = field
                .arguments
                .iter()
                .map(|arg| format!("{}: {}", arg.name, arg.value_type))
                .collect();
            args.sort();
            if args.is_empty() {
                format!("{}: {}", field.name, field.field_type)
            } else {
                format!("{}({}): {}", field.name, args.join(", "), field.field_type)
            }
        })
        .collect();
    signatures.sort();
    signatures
}

fn sorted(fields: &[&str]) -> Vec<String> {
    let mut fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
    fields.sort();
    fields
}

#[test]
fn declares_object_types() -> Result<()> {
    let sdl = schema().as_schema_language();
    let doc = parse_schema::<String>(&sdl)?;

    assert_eq!(
        signatures(&doc, "User"),
        sorted(&["id: Int!", "name: String!", "cars: [Car]"])
    );
    assert_eq!(
        signatures(&doc, "Car"),
        sorted(&[
            "id: Int!",
            "brand: String!",
            "speed: Int",
            "ownerId: Int!",
            "owner: User",
        ])
    );
    Ok(())
}

#[test]
fn declares_root_operations() -> Result<()> {
    let sdl = schema().as_schema_language();
    let doc = parse_schema::<String>(&sdl)?;

    assert_eq!(
        signatures(&doc, "Query"),
        sorted(&[
            "users: [User]",
            "user(id: Int!): User",
            "cars: [Car]",
            "car(id: Int!): Car",
        ])
    );
    assert_eq!(
        signatures(&doc, "Mutation"),
        sorted(&[
            "createUser(name: String!): User",
            "createCar(brand: String!, ownerId: Int!, speed: Int): Car",
            "removeUser(id: Int!): [User]",
        ])
    );
    Ok(())
}

#[test]
fn carries_type_descriptions() -> Result<()> {
    let sdl = schema().as_schema_language();
    let doc = parse_schema::<String>(&sdl)?;

    for (type_name, description) in &[
        ("User", "This represent a user."),
        ("Car", "This represent a car for a user."),
        ("Query", "Root query"),
        ("Mutation", "Root mutation"),
    ] {
        assert_eq!(
            object(&doc, type_name).description.as_deref(),
            Some(*description),
            "description of `{}`",
            type_name
        );
    }
    Ok(())
}
