use garageql::{schema, Ctx};
use juniper::{DefaultScalarValue, ExecutionError, Value, Variables};

pub type Errors = Vec<ExecutionError<DefaultScalarValue>>;

/// Runs a document that is expected to pass validation.
pub fn execute(document: &str, ctx: &Ctx) -> (Value, Errors) {
    execute_with(document, Variables::new(), ctx)
}

#[allow(dead_code)]
pub fn execute_with(document: &str, variables: Variables, ctx: &Ctx) -> (Value, Errors) {
    let schema = schema();
    juniper::execute_sync(document, None, &schema, &variables, ctx).unwrap()
}
