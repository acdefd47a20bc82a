use super::input::AppTextArea;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginState {
    pub email: AppTextArea<'static>,
    pub password: AppTextArea<'static>,
    pub focus: LoginField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for LoginState {
    fn default() -> Self {
        let mut password = AppTextArea::default();
        password.set_mask_char('•');
        Self {
            email: AppTextArea::default(),
            password,
            focus: LoginField::Email,
            error: None,
            submitting: false,
        }
    }
}

impl LoginState {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn focused_mut(&mut self) -> &mut AppTextArea<'static> {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    #[must_use]
    pub fn credentials(&self) -> (String, String) {
        (
            self.email.text().trim().to_string(),
            self.password.text(),
        )
    }
}
