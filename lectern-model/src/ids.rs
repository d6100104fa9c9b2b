use crate::error::ModelError;

macro_rules! api_id {
    ($(#[$doc:meta])* $name:ident, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw API identifier, rejecting empty or blank input.
            pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ModelError::InvalidId(format!(
                        "{} cannot be empty",
                        $label
                    )));
                }
                Ok(Self(id))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

api_id!(
    /// Strongly typed identifier for a course, as issued by the catalog API.
    CourseId,
    "course id"
);

api_id!(
    /// Strongly typed identifier for a module within a course.
    ModuleId,
    "module id"
);

api_id!(
    /// Strongly typed identifier for a lesson within a module.
    LessonId,
    "lesson id"
);
