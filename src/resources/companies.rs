use serde_json::Value;

use super::{id_param, Named, Search, NAME_ONLY, SEARCH_ONLY};
use crate::{
    client::SnipeClient,
    error::Result,
    schema::{Field, Operation, Resource},
    session::{HttpMethod, Transport},
};

const COMPANY_ID: Option<Field> = id_param("company_id");

pub const CREATE: Operation = Operation {
    name: "create_company",
    method: HttpMethod::Post,
    resource: Resource::Companies,
    path: "",
    path_param: None,
    fields: NAME_ONLY,
};

pub const LIST: Operation = Operation {
    name: "get_companies",
    method: HttpMethod::Get,
    resource: Resource::Companies,
    path: "",
    path_param: None,
    fields: SEARCH_ONLY,
};

pub const GET: Operation = Operation {
    name: "get_company_by_id",
    method: HttpMethod::Get,
    resource: Resource::Companies,
    path: "{}",
    path_param: COMPANY_ID,
    fields: &[],
};

pub const UPDATE: Operation = Operation {
    name: "update_company",
    method: HttpMethod::Patch,
    resource: Resource::Companies,
    path: "{}",
    path_param: COMPANY_ID,
    fields: NAME_ONLY,
};

pub const DELETE: Operation = Operation {
    name: "delete_company",
    method: HttpMethod::Delete,
    resource: Resource::Companies,
    path: "{}",
    path_param: COMPANY_ID,
    fields: &[],
};

impl<T: Transport> SnipeClient<T> {
    pub fn create_company(&self, name: &str) -> Result<Value> {
        self.call(&CREATE, None, &Named::new(name))
    }

    pub fn get_companies(&self, search: Option<&str>) -> Result<Value> {
        self.call(&LIST, None, &Search::new(search))
    }

    pub fn get_company_by_id(&self, company_id: u64) -> Result<Value> {
        self.call(&GET, Some(company_id.into()), &())
    }

    pub fn get_company_by_name(&self, name: &str) -> Result<Option<Value>> {
        self.find_by_name(&LIST, &Search::new(Some(name)), name)
    }

    pub fn update_company(&self, company_id: u64, name: &str) -> Result<Value> {
        self.call(&UPDATE, Some(company_id.into()), &Named::new(name))
    }

    pub fn delete_company(&self, company_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(company_id.into()), &())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::mock::MockTransport;
    use serde_json::json;

    #[test]
    fn test_get_companies_sends_search() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client.get_companies(Some("Acme")).unwrap();
        client.get_companies(None).unwrap();

        let requests = client.transport().requests();
        assert_eq!(
            requests[0].query,
            vec![("search".to_string(), "Acme".to_string())]
        );
        assert!(requests[1].query.is_empty());
    }

    #[test]
    fn test_get_company_by_name() {
        let client = SnipeClient::with_transport(MockTransport::new().respond(json!({
            "total": 2,
            "rows": [{"id": 1, "name": "Acme Ltd"}, {"id": 2, "name": "Acme"}]
        })));
        assert_eq!(
            client.get_company_by_name("Acme").unwrap(),
            Some(json!({"id": 2, "name": "Acme"}))
        );
    }

    #[test]
    fn test_update_company() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client.update_company(4, "Globex").unwrap();
        let request = client.transport().last_request();
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.path(), "/api/v1/companies/4");
        assert_eq!(request.body, Some(json!({"name": "Globex"})));
    }
}
