/// URL layout of a resource collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// `POST /x`, `PUT /x/{id}`, `DELETE /x/{id}`
    Conventional,
    /// `POST /x/add`, `PUT /x/update/{id}`, `DELETE /x/delete/{id}`
    Verbose,
}

/// Paths for one collection, relative to the API root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    base: &'static str,
    style: PathStyle,
}

impl Endpoints {
    pub const fn new(base: &'static str, style: PathStyle) -> Self {
        Self { base, style }
    }

    pub fn list(&self) -> String {
        self.base.to_string()
    }

    pub fn create(&self) -> String {
        match self.style {
            PathStyle::Conventional => self.base.to_string(),
            PathStyle::Verbose => format!("{}/add", self.base),
        }
    }

    pub fn update(&self, id: &str) -> String {
        match self.style {
            PathStyle::Conventional => format!("{}/{id}", self.base),
            PathStyle::Verbose => format!("{}/update/{id}", self.base),
        }
    }

    pub fn delete(&self, id: &str) -> String {
        match self.style {
            PathStyle::Conventional => format!("{}/{id}", self.base),
            PathStyle::Verbose => format!("{}/delete/{id}", self.base),
        }
    }

    /// Same in both styles
    pub fn toggle(&self, id: &str) -> String {
        format!("{}/toggle/{id}", self.base)
    }
}
