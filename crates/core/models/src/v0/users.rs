auto_derived!(
    /// Role of a user on campus
    #[derive(Copy, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
    pub enum UserRole {
        #[default]
        Student,
        Staff,
        Admin,
    }
);
