//! Form field value objects

/// Mask character used for secret fields
pub const MASK_CHAR: char = '•';

/// Represents a single text field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub is_secret: bool,
}

impl FormField {
    /// Create a new plain text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            is_secret: false,
        }
    }

    /// Create a new secret field (rendered masked when masking is enabled)
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Number of characters entered
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    #[allow(dead_code)]
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Get the display value for rendering
    pub fn display_value(&self, mask_secrets: bool) -> String {
        if self.is_secret && mask_secrets {
            MASK_CHAR.to_string().repeat(self.char_count())
        } else {
            self.value.clone()
        }
    }
}
