use super::{FIELD_EMAIL, FIELD_SKILLS, FIELD_WHATSAPP};

/// A CV picked by the user: display name plus the platform file handle.
///
/// In the browser `F` is a `web_sys::File`; tests use plain byte buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct CvFile<F> {
    pub name: String,
    pub handle: F,
}

impl<F> CvFile<F> {
    pub fn new(name: impl Into<String>, handle: F) -> Self {
        Self {
            name: name.into(),
            handle,
        }
    }
}

/// In-memory contents of the intake form that have not been submitted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeDraft<F> {
    pub file: Option<CvFile<F>>,
    pub skills: String,
    pub whatsapp: String,
    pub email: String,
}

impl<F> Default for IntakeDraft<F> {
    fn default() -> Self {
        Self {
            file: None,
            skills: String::new(),
            whatsapp: String::new(),
            email: String::new(),
        }
    }
}

impl<F> IntakeDraft<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_contact_channel(&self) -> bool {
        !self.whatsapp.is_empty() || !self.email.is_empty()
    }

    pub fn has_profile_content(&self) -> bool {
        self.file.is_some() || !self.skills.is_empty()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|f| f.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.file.is_none()
            && self.skills.is_empty()
            && self.whatsapp.is_empty()
            && self.email.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<F: Clone> IntakeDraft<F> {
    /// Snapshot the draft into the multipart payload sent to the server.
    pub fn to_payload(&self) -> UploadPayload<F> {
        UploadPayload {
            cv: self.file.clone(),
            skills: self.skills.clone(),
            whatsapp: self.whatsapp.clone(),
            email: self.email.clone(),
        }
    }
}

/// Body of the upload request. `cv` is only attached when a file was picked;
/// the text fields are always sent, possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPayload<F> {
    pub cv: Option<CvFile<F>>,
    pub skills: String,
    pub whatsapp: String,
    pub email: String,
}

impl<F> UploadPayload<F> {
    /// Text parts in the order they are appended to the form body.
    pub fn text_fields(&self) -> [(&'static str, &str); 3] {
        [
            (FIELD_SKILLS, self.skills.as_str()),
            (FIELD_WHATSAPP, self.whatsapp.as_str()),
            (FIELD_EMAIL, self.email.as_str()),
        ]
    }
}
