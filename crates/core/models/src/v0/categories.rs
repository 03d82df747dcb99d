use iso8601_timestamp::Timestamp;

#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// Item category
    pub struct Category {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Display name
        pub name: String,
        /// Id of the user who created this category
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        pub created_by: Option<String>,
        /// When this category was created
        #[cfg_attr(feature = "utoipa", schema(value_type = String))]
        pub created_at: Timestamp,
    }

    /// # Category Data
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataCreateCategory {
        /// Display name
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 64)))]
        pub name: String,
    }

    /// # Category Edit
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataEditCategory {
        /// New display name
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 64)))]
        pub name: String,
    }
);
