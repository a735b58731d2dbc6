//! User record model
//!
//! Shape follows the jsonplaceholder-style `/users` payload. Only `id`,
//! `name`, `email` and `address.city` are needed by the table; everything
//! else defaults to empty when the endpoint omits it.

use serde::Deserialize;

/// One user entry returned by the data endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

impl User {
    /// City shown in the table's third column.
    pub fn city(&self) -> &str {
        &self.address.city
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_jsonplaceholder_record() {
        let body = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net"
            }
        }"#;

        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.email, "Sincere@april.biz");
        assert_eq!(user.city(), "Gwenborough");
        assert_eq!(user.company.name, "Romaguera-Crona");
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let body = r#"{"id": 7, "name": "Ada", "email": "ada@example.com"}"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "");
        assert_eq!(user.city(), "");
        assert_eq!(user.company.name, "");
    }

    #[test]
    fn missing_name_is_an_error() {
        let body = r#"{"id": 7, "email": "ada@example.com"}"#;
        assert!(serde_json::from_str::<User>(body).is_err());
    }
}
