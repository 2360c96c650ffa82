//! Card display fields and the in-place edit mode.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Role,
    Institution,
    Email,
    Github,
    Linkedin,
    Bio,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Name,
        ProfileField::Role,
        ProfileField::Institution,
        ProfileField::Email,
        ProfileField::Github,
        ProfileField::Linkedin,
        ProfileField::Bio,
    ];

    /// Key used in markup (`data-field`, `data-display`, `data-<key>`).
    pub fn key(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Role => "role",
            ProfileField::Institution => "institution",
            ProfileField::Email => "email",
            ProfileField::Github => "github",
            ProfileField::Linkedin => "linkedin",
            ProfileField::Bio => "bio",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileFields {
    pub name: String,
    pub role: String,
    pub institution: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub bio: String,
}

impl Default for ProfileFields {
    fn default() -> Self {
        Self {
            name: "Anmol Kool".into(),
            role: "Cybersecurity Student".into(),
            institution: "PSIT (2022-2026)".into(),
            email: "anmolkool076@gmail.com".into(),
            github: "github.com/Recklxz".into(),
            linkedin: "linkedin.com/in/anmolkool".into(),
            bio: "Cybersecurity student with expertise in penetration testing, threat detection, and security automation.".into(),
        }
    }
}

impl ProfileFields {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Role => &self.role,
            ProfileField::Institution => &self.institution,
            ProfileField::Email => &self.email,
            ProfileField::Github => &self.github,
            ProfileField::Linkedin => &self.linkedin,
            ProfileField::Bio => &self.bio,
        }
    }

    fn slot(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Role => &mut self.role,
            ProfileField::Institution => &mut self.institution,
            ProfileField::Email => &mut self.email,
            ProfileField::Github => &mut self.github,
            ProfileField::Linkedin => &mut self.linkedin,
            ProfileField::Bio => &mut self.bio,
        }
    }

    /// Link target for fields that render as anchors.
    pub fn href(&self, field: ProfileField) -> Option<String> {
        let value = self.get(field).trim();
        if value.is_empty() {
            return None;
        }
        match field {
            ProfileField::Email => Some(format!("mailto:{value}")),
            ProfileField::Github | ProfileField::Linkedin => {
                if value.starts_with("http://") || value.starts_with("https://") {
                    Some(value.to_string())
                } else {
                    Some(format!("https://{value}"))
                }
            }
            _ => None,
        }
    }
}

type ChangeCallback = Box<dyn FnMut(&ProfileFields)>;

/// Transient edit state for one mounted card; never persisted.
pub struct EditState {
    fields: ProfileFields,
    editing: bool,
    on_change: Option<ChangeCallback>,
}

impl EditState {
    pub fn new(fields: ProfileFields) -> Self {
        Self {
            fields,
            editing: false,
            on_change: None,
        }
    }

    /// Host callback invoked with the full record after every field edit.
    pub fn with_on_change(mut self, on_change: impl FnMut(&ProfileFields) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn fields(&self) -> &ProfileFields {
        &self.fields
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn set_editing(&mut self, editing: bool) {
        if self.editing != editing {
            self.editing = editing;
            log::info!("[profile] edit mode {}", if editing { "on" } else { "off" });
        }
    }

    pub fn toggle_editing(&mut self) -> bool {
        self.set_editing(!self.editing);
        self.editing
    }

    /// Store `value` for `field`. Returns whether anything changed; the host
    /// callback only fires on change.
    pub fn set_field(&mut self, field: ProfileField, value: &str) -> bool {
        let slot = self.fields.slot(field);
        if slot == value {
            return false;
        }
        slot.clear();
        slot.push_str(value);
        if let Some(cb) = self.on_change.as_mut() {
            cb(&self.fields);
        }
        true
    }
}
