//! Employee directory endpoints

use crate::client::SampleClient;
use crate::error::ApiResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Path of the employee list, relative to the source base URL
pub const EMPLOYEES_PATH: &str = "employees.json";

/// Anything that can produce the employee list
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// GET employees.json
    async fn employees(&self) -> ApiResult<EmployeeResponse>;
}

/// Employee directory API interface
#[derive(Clone)]
pub struct EmployeesApi {
    client: SampleClient,
}

impl EmployeesApi {
    /// Create a new employees API interface
    pub(crate) fn new(client: SampleClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmployeeService for EmployeesApi {
    async fn employees(&self) -> ApiResult<EmployeeResponse> {
        self.client.get(EMPLOYEES_PATH).await
    }
}

/// Wrapper object around the employee list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    /// Every employee in the directory
    pub employees: Vec<Employee>,
}

/// A single employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable identifier, `uuid` on the wire
    #[serde(rename = "uuid")]
    pub id: String,
    /// Display name
    pub full_name: String,
    /// Contact phone number
    pub phone_number: Option<String>,
    /// Work email
    pub email_address: String,
    /// Short free-text bio
    pub biography: Option<String>,
    /// Thumbnail photo URL
    pub photo_url_small: Option<String>,
    /// Full-size photo URL
    pub photo_url_large: Option<String>,
    /// Team name
    pub team: String,
    /// Employment type
    pub employee_type: EmployeeType,
}

/// Employment kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeType {
    /// `FULL_TIME`
    FullTime,
    /// `PART_TIME`
    PartTime,
    /// `CONTRACTOR`
    Contractor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_deserialize() {
        let json = r#"{
            "employees": [{
                "uuid": "0d8fcc12-4d0c-425c-8355-390b312b909c",
                "full_name": "Justine Mason",
                "phone_number": "5553280123",
                "email_address": "jmason.demo@example.com",
                "biography": "Engineer on the Point of Sale team.",
                "photo_url_small": "https://example.com/small.jpg",
                "photo_url_large": "https://example.com/large.jpg",
                "team": "Point of Sale",
                "employee_type": "FULL_TIME"
            }]
        }"#;

        let response: EmployeeResponse = serde_json::from_str(json).unwrap();
        let employee = &response.employees[0];
        assert_eq!(employee.id, "0d8fcc12-4d0c-425c-8355-390b312b909c");
        assert_eq!(employee.full_name, "Justine Mason");
        assert_eq!(employee.employee_type, EmployeeType::FullTime);
    }

    #[test]
    fn test_optional_fields_may_be_missing() {
        let json = r#"{
            "uuid": "a98f8a2e-c975-4ba3-8b35-01f719e7de2d",
            "full_name": "Camille Rogers",
            "email_address": "crogers.demo@example.com",
            "team": "Public Web & Marketing",
            "employee_type": "CONTRACTOR"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.phone_number.is_none());
        assert!(employee.photo_url_large.is_none());
        assert_eq!(employee.employee_type, EmployeeType::Contractor);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = r#"{"uuid": "1", "full_name": "No Email", "team": "x", "employee_type": "PART_TIME"}"#;
        assert!(serde_json::from_str::<Employee>(json).is_err());
    }
}
