/// A tiny field-based input model shared by the login view and the
/// popup forms. Pure state — rendering happens in app.rs.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    pub masked: bool,
}

impl FormField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: false,
        }
    }

    pub fn masked(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: true,
        }
    }

    /// What the cursor row shows: masked fields render dots.
    pub fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[derive(Debug, Clone)]
pub struct Form {
    pub fields: Vec<FormField>,
    pub active: usize,
    pub error: Option<String>,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            active: 0,
            error: None,
        }
    }

    pub fn active_field_mut(&mut self) -> &mut FormField {
        &mut self.fields[self.active]
    }

    pub fn next_field(&mut self) {
        self.active = (self.active + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.active = (self.active + self.fields.len() - 1) % self.fields.len();
    }

    pub fn push_char(&mut self, c: char) {
        self.active_field_mut().value.push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.active_field_mut().value.pop();
        self.error = None;
    }

    pub fn value(&self, index: usize) -> &str {
        &self.fields[index].value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Form {
        Form::new(vec![FormField::new("Username"), FormField::masked("Password")])
    }

    #[test]
    fn field_cycling_wraps_both_ways() {
        let mut form = sample();
        assert_eq!(form.active, 0);
        form.next_field();
        assert_eq!(form.active, 1);
        form.next_field();
        assert_eq!(form.active, 0);
        form.prev_field();
        assert_eq!(form.active, 1);
    }

    #[test]
    fn typing_targets_the_active_field() {
        let mut form = sample();
        form.push_char('a');
        form.next_field();
        form.push_char('1');
        form.push_char('2');
        form.backspace();
        assert_eq!(form.value(0), "a");
        assert_eq!(form.value(1), "1");
    }

    #[test]
    fn masked_fields_render_dots() {
        let mut form = sample();
        form.next_field();
        form.push_char('x');
        form.push_char('y');
        assert_eq!(form.fields[1].display_value(), "••");
        assert_eq!(form.fields[0].display_value(), "");
    }
}
