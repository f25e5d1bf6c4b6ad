//! Users and the items checked out to them.
//!
//! The server wants `password_confirmation` next to every `password`, so the
//! argument structs carry only the password and the confirmation is filled in
//! before the request is built.

use serde::Serialize;
use serde_json::Value;

use super::{flag, id_param, int, text};
use crate::{
    client::{to_args, SnipeClient},
    error::Result,
    schema::{Field, Operation, Resource, LIMIT, OFFSET, ORDER, SEARCH, SORT},
    session::{HttpMethod, Transport},
    validation::FieldKind,
};

const USER_ID: Option<Field> = id_param("user_id");

pub const CREATE: Operation = Operation {
    name: "create_user",
    method: HttpMethod::Post,
    resource: Resource::Users,
    path: "",
    path_param: None,
    fields: &[
        Field::required("first_name", FieldKind::Str),
        Field::required("username", FieldKind::Str),
        Field::required("password", FieldKind::Str),
        Field::required("password_confirmation", FieldKind::Str),
        text("last_name"),
        text("email"),
        text("permissions"),
        flag("activated"),
        text("phone"),
        text("jobtitle"),
        int("manager_id"),
        text("employee_num"),
        text("notes"),
        int("company_id"),
        flag("two_factor_enrolled"),
        flag("two_factor_optin"),
        int("department_id"),
        int("location_id"),
    ],
};

pub const LIST: Operation = Operation {
    name: "get_users",
    method: HttpMethod::Get,
    resource: Resource::Users,
    path: "",
    path_param: None,
    fields: &[
        SEARCH,
        LIMIT,
        OFFSET,
        SORT,
        ORDER,
        int("group_id"),
        int("company_id"),
        int("department_id"),
        flag("deleted"),
    ],
};

pub const GET: Operation = Operation {
    name: "get_user_by_id",
    method: HttpMethod::Get,
    resource: Resource::Users,
    path: "{}",
    path_param: USER_ID,
    fields: &[],
};

pub const LIST_ASSETS: Operation = Operation {
    name: "get_user_assets",
    method: HttpMethod::Get,
    resource: Resource::Users,
    path: "{}/assets",
    path_param: USER_ID,
    fields: &[],
};

pub const LIST_ACCESSORIES: Operation = Operation {
    name: "get_user_accessories",
    method: HttpMethod::Get,
    resource: Resource::Users,
    path: "{}/accessories",
    path_param: USER_ID,
    fields: &[],
};

pub const UPDATE: Operation = Operation {
    name: "update_user",
    method: HttpMethod::Patch,
    resource: Resource::Users,
    path: "{}",
    path_param: USER_ID,
    fields: &[
        text("first_name"),
        text("username"),
        text("password"),
        text("password_confirmation"),
        text("last_name"),
        text("email"),
        text("permissions"),
        flag("activated"),
        text("phone"),
        text("jobtitle"),
        int("manager_id"),
        text("employee_num"),
        text("notes"),
        int("company_id"),
        flag("two_factor_enrolled"),
        flag("two_factor_optin"),
        int("department_id"),
        int("location_id"),
    ],
};

pub const DELETE: Operation = Operation {
    name: "delete_user",
    method: HttpMethod::Delete,
    resource: Resource::Users,
    path: "{}",
    path_param: USER_ID,
    fields: &[],
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewUser {
    pub first_name: String,
    pub username: String,
    pub password: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Permissions as a JSON-encoded string
    pub permissions: Option<String>,
    pub activated: Option<bool>,
    pub phone: Option<String>,
    pub jobtitle: Option<String>,
    pub manager_id: Option<u64>,
    pub employee_num: Option<String>,
    pub notes: Option<String>,
    pub company_id: Option<u64>,
    pub two_factor_enrolled: Option<bool>,
    pub two_factor_optin: Option<bool>,
    pub department_id: Option<u64>,
    pub location_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub permissions: Option<String>,
    pub activated: Option<bool>,
    pub phone: Option<String>,
    pub jobtitle: Option<String>,
    pub manager_id: Option<u64>,
    pub employee_num: Option<String>,
    pub notes: Option<String>,
    pub company_id: Option<u64>,
    pub two_factor_enrolled: Option<bool>,
    pub two_factor_optin: Option<bool>,
    pub department_id: Option<u64>,
    pub location_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserQuery {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub group_id: Option<u64>,
    pub company_id: Option<u64>,
    pub department_id: Option<u64>,
    pub deleted: Option<bool>,
}

impl<T: Transport> SnipeClient<T> {
    pub fn create_user(&self, user: &NewUser) -> Result<Value> {
        self.execute(&CREATE, None, with_confirmation(user)?)
    }

    pub fn get_users(&self, query: &UserQuery) -> Result<Value> {
        self.call(&LIST, None, query)
    }

    pub fn get_user_by_id(&self, user_id: u64) -> Result<Value> {
        self.call(&GET, Some(user_id.into()), &())
    }

    pub fn get_user_by_name(&self, name: &str) -> Result<Option<Value>> {
        let query = UserQuery {
            search: Some(name.to_string()),
            ..Default::default()
        };
        self.find_by_name(&LIST, &query, name)
    }

    /// Assets checked out to the user
    pub fn get_user_assets(&self, user_id: u64) -> Result<Value> {
        self.call(&LIST_ASSETS, Some(user_id.into()), &())
    }

    /// Accessories checked out to the user
    pub fn get_user_accessories(&self, user_id: u64) -> Result<Value> {
        self.call(&LIST_ACCESSORIES, Some(user_id.into()), &())
    }

    pub fn update_user(&self, user_id: u64, changes: &UserUpdate) -> Result<Value> {
        self.execute(&UPDATE, Some(user_id.into()), with_confirmation(changes)?)
    }

    pub fn delete_user(&self, user_id: u64) -> Result<Value> {
        self.call(&DELETE, Some(user_id.into()), &())
    }
}

/// Copies `password` into `password_confirmation`.
fn with_confirmation<A: Serialize>(user: &A) -> Result<serde_json::Map<String, Value>> {
    let mut args = to_args(user)?;
    if let Some(password) = args.get("password").cloned() {
        args.insert("password_confirmation".to_string(), password);
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::mock::MockTransport;
    use serde_json::json;

    #[test]
    fn test_create_user_confirms_password() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client
            .create_user(&NewUser {
                first_name: "Ada".to_string(),
                username: "ada".to_string(),
                password: "s3cret!".to_string(),
                activated: Some(true),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(
            serde_json::to_string(&client.transport().last_request().body).unwrap(),
            r#"{"first_name":"Ada","username":"ada","password":"s3cret!","password_confirmation":"s3cret!","activated":true}"#
        );
    }

    #[test]
    fn test_update_user_without_password() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client
            .update_user(
                3,
                &UserUpdate {
                    jobtitle: Some("Engineer".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        let request = client.transport().last_request();
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.path(), "/api/v1/users/3");
        assert_eq!(request.body, Some(json!({"jobtitle": "Engineer"})));
    }

    #[test]
    fn test_update_user_with_password() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client
            .update_user(
                3,
                &UserUpdate {
                    password: Some("n3w".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(
            client.transport().last_request().body,
            Some(json!({"password": "n3w", "password_confirmation": "n3w"}))
        );
    }

    #[test]
    fn test_checked_out_items() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client.get_user_assets(8).unwrap();
        client.get_user_accessories(8).unwrap();
        let requests = client.transport().requests();
        assert_eq!(requests[0].path(), "/api/v1/users/8/assets");
        assert_eq!(requests[1].path(), "/api/v1/users/8/accessories");
        assert!(requests.iter().all(|r| r.method == HttpMethod::Get));
    }

    #[test]
    fn test_get_users_filters() {
        let client = SnipeClient::with_transport(MockTransport::new());
        client
            .get_users(&UserQuery {
                search: Some("ada".to_string()),
                deleted: Some(true),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(
            client.transport().last_request().path_and_query(),
            "/api/v1/users?search=ada&deleted=true"
        );
    }
}
