use super::{finish, Repository};
use crate::client::SampleClient;
use crate::endpoints::{Employee, EmployeeService, EmployeesApi};
use crate::error::ApiResult;
use async_trait::async_trait;
use samplekit_telemetry::Timer;

/// Employee list, unwrapped from its response object
pub struct EmployeeRepository<S> {
    service: S,
}

impl<S: EmployeeService> EmployeeRepository<S> {
    /// Wrap a service binding
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

impl EmployeeRepository<EmployeesApi> {
    /// Repository backed by the HTTP binding of `client`
    pub fn http(client: &SampleClient) -> Self {
        Self::new(client.employees())
    }
}

#[async_trait]
impl<S: EmployeeService> Repository for EmployeeRepository<S> {
    type Entity = Employee;
    const SOURCE: &'static str = "employees";

    async fn fetch(&self) -> ApiResult<Vec<Employee>> {
        let timer = Timer::start(Self::SOURCE);
        let result = self.service.employees().await.map(|r| r.employees);
        finish(Self::SOURCE, timer, result)
    }
}
