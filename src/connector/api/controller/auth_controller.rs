use anyhow::Result;

use crate::cli::AuthCommand;
use crate::domain::Registration;

use super::super::Container;
use super::output::format_user;

pub struct AuthController<'a> {
    container: &'a Container,
}

impl<'a> AuthController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn handle(&self, command: AuthCommand) -> Result<String> {
        let use_case = self.container.auth_use_case();

        match command {
            AuthCommand::Login { email, password } => {
                let response = use_case.login(&email, &password).await?;
                Ok(self.format_welcome(
                    &response.user.full_name(),
                    response.user.registration_complete,
                ))
            }
            AuthCommand::Register {
                email,
                password,
                name,
                last_name,
                role,
                phone,
                degree,
            } => {
                let registration = Registration {
                    email,
                    password,
                    first_name: name,
                    last_name,
                    role,
                    phone,
                    degree,
                };
                let response = use_case.register(&registration).await?;
                Ok(self.format_welcome(
                    &response.user.full_name(),
                    response.user.registration_complete,
                ))
            }
            AuthCommand::Me => {
                let user = use_case.me().await?;
                Ok(format_user(&user))
            }
            AuthCommand::Logout => {
                use_case.logout().await?;
                Ok("Logged out.".to_string())
            }
            AuthCommand::GoogleUrl => Ok(use_case.google_url()),
            AuthCommand::Callback { url } => {
                let login = use_case.complete_oauth_callback(&url).await?;
                let user = use_case.me().await?;
                Ok(self.format_welcome(&user.full_name(), login.registration_complete))
            }
        }
    }

    fn format_welcome(&self, name: &str, registration_complete: bool) -> String {
        let mut output = format!("Welcome, {}.", name);
        if !registration_complete {
            output.push_str("\nYour registration is incomplete: run `leoneta profile complete`.");
        }
        output
    }
}
