//! Employee record

use serde::{Deserialize, Serialize};

/// A flat employee record keyed by `id`.
///
/// Field contents are not validated: an empty name or a negative salary
/// is stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub salary: f64,
}

impl Employee {
    pub fn new(id: i64, name: impl Into<String>, position: impl Into<String>, salary: f64) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_shape() {
        let employee = Employee::new(1, "Shivangi", "Software Engineer", 100000.5);
        let value = serde_json::to_value(&employee).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Shivangi",
                "position": "Software Engineer",
                "salary": 100000.5
            })
        );
    }

    #[test]
    fn test_integer_salary_decodes() {
        let employee: Employee =
            serde_json::from_str(r#"{"id":1,"name":"A","position":"Eng","salary":1000}"#).unwrap();
        assert_eq!(employee.salary, 1000.0);
    }

    #[test]
    fn test_missing_field_rejected() {
        let result = serde_json::from_str::<Employee>(r#"{"id":1,"name":"A"}"#);
        assert!(result.is_err());
    }
}
