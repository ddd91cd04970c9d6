//! Built-in templates seeded into the Default namespace.

use crate::schema::{Field, FieldType, Template};

/// The templates written by `seed_default_templates` on first run.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            "Expense Log",
            vec![
                Field::new("Date", FieldType::Date),
                Field::new("Description", FieldType::Text),
                Field::new("Amount", FieldType::Money),
                Field::new("Reimbursed", FieldType::Boolean),
            ],
        ),
        Template::new(
            "Inventory",
            vec![
                Field::new("Item", FieldType::Text),
                Field::new("Quantity", FieldType::Number),
                Field::new("Unit Cost", FieldType::Money),
            ],
        ),
        Template::new(
            "Mileage",
            vec![
                Field::new("Date", FieldType::Date),
                Field::new("Destination", FieldType::Text),
                Field::new("Miles", FieldType::Decimal),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_template_fields, validate_template_name};
    use std::collections::HashSet;

    #[test]
    fn test_builtins_are_valid() {
        for template in builtin_templates() {
            assert!(validate_template_name(&template.name).is_empty());
            assert!(
                validate_template_fields(&template.fields).is_empty(),
                "{} has invalid fields",
                template.name
            );
        }
    }

    #[test]
    fn test_builtin_names_unique() {
        let templates = builtin_templates();
        let names: HashSet<_> = templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), templates.len());
    }
}
