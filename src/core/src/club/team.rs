use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub tenant_id: u32,
    pub name: String,
    pub logo_url: Option<String>,
    /// Explicit division relation. Teams seeded before divisions became
    /// first-class may leave this unset and are resolved once through
    /// the name-marker migration (`DivisionMarkers`).
    pub division_id: Option<u32>,
}

impl Team {
    pub fn new(id: u32, tenant_id: u32, name: String) -> Self {
        Team {
            id,
            tenant_id,
            name,
            logo_url: None,
            division_id: None,
        }
    }

    pub fn with_division(mut self, division_id: u32) -> Self {
        self.division_id = Some(division_id);
        self
    }
}
