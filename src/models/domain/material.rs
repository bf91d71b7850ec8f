use serde::{Deserialize, Serialize};

/// Reading material converted to display markup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormattedMaterial {
    pub markup: String,
}

impl From<FormattedMaterial> for String {
    fn from(material: FormattedMaterial) -> Self {
        material.markup
    }
}
