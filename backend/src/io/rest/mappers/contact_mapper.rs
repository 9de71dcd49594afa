use shared::{AddContactRequest, Contact, ContactResponse, RecordView};

use crate::domain::commands::contacts::AddContactCommand;

pub struct ContactMapper;

impl ContactMapper {
    pub fn to_add_command(request: AddContactRequest) -> AddContactCommand {
        AddContactCommand {
            name: request.name,
            phone: request.phone,
            website: request.website,
            category: request.category,
            notes: request.notes,
        }
    }

    /// None means the hotline was already in the directory
    pub fn to_hotline_response(saved: Option<RecordView<Contact>>) -> ContactResponse {
        let message = match &saved {
            Some(view) => format!("Saved {} to contacts!", view.record.name),
            None => "Already in your contacts".to_string(),
        };
        ContactResponse { contact: saved, message }
    }
}
