//! Help text rendered from tool schemas.

use crate::tools::ToolSchema;

/// Render help for one tool.
pub fn format_tool_help(schema: &ToolSchema) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} — {}\n\n", schema.name, schema.description));

    if schema.params.is_empty() {
        output.push_str("No parameters.\n");
    } else {
        output.push_str("Parameters:\n");
        for param in &schema.params {
            output.push_str(&format!(
                "  {} : {}\n    {}\n",
                param.name, param.param_type, param.description
            ));
        }
    }

    if !schema.examples.is_empty() {
        output.push_str("\nExamples:\n");
        for example in &schema.examples {
            output.push_str(&format!("  # {}\n", example.description));
            output.push_str(&format!("  {}\n\n", example.code));
        }
    }

    output
}
