use anyhow::Result;

use crate::cli::{ProfileCommand, ProfileFields};
use crate::domain::{CompleteRegistration, ProfileUpdate};

use super::super::Container;
use super::output::{format_stats, format_user};

pub struct ProfileController<'a> {
    container: &'a Container,
}

impl<'a> ProfileController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn handle(&self, command: ProfileCommand) -> Result<String> {
        let use_case = self.container.profile_use_case();

        match command {
            ProfileCommand::Show { id } => {
                let id = self.resolve_id(id).await?;
                let user = use_case.get(&id).await?;
                Ok(format_user(&user))
            }
            ProfileCommand::Update { fields } => {
                let id = self.resolve_id(None).await?;
                let user = use_case.update(&id, &to_update(fields)).await?;
                Ok(format!("Profile updated.\n\n{}", format_user(&user)))
            }
            ProfileCommand::Complete {
                role,
                student_code,
                fields,
            } => {
                let id = self.resolve_id(None).await?;
                let details = CompleteRegistration {
                    last_name: fields.last_name,
                    phone: fields.phone,
                    gender: fields.gender,
                    role,
                    degree: fields.degree,
                    student_code,
                    campus: fields.campus,
                    address: fields.address,
                    about: fields.about,
                };
                let user = use_case.complete_registration(&id, &details).await?;
                Ok(format!("Registration completed.\n\n{}", format_user(&user)))
            }
            ProfileCommand::Stats { id } => {
                let id = self.resolve_id(id).await?;
                let stats = use_case.stats(&id).await?;
                Ok(format_stats(&stats))
            }
            ProfileCommand::Password { current, new } => {
                let id = self.resolve_id(None).await?;
                use_case.change_password(&id, &current, &new).await?;
                Ok("Password changed.".to_string())
            }
            ProfileCommand::Photo { url } => {
                let id = self.resolve_id(None).await?;
                use_case.update_photo(&id, &url).await?;
                Ok("Photo updated.".to_string())
            }
        }
    }

    /// Falls back to the logged-in user when no id is given.
    async fn resolve_id(&self, id: Option<String>) -> Result<String> {
        match id {
            Some(id) => Ok(id),
            None => Ok(self.container.auth_use_case().me().await?.id),
        }
    }
}

fn to_update(fields: ProfileFields) -> ProfileUpdate {
    ProfileUpdate {
        first_name: fields.name,
        last_name: fields.last_name,
        phone: fields.phone,
        gender: fields.gender,
        degree: fields.degree,
        campus: fields.campus,
        address: fields.address,
        about: fields.about,
        ..Default::default()
    }
}
