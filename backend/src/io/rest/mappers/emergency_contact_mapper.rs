use shared::{
    AddEmergencyContactRequest, EmergencyContact, EmergencyContactListResponse,
    EmergencyContactResponse, RecordView,
};

use crate::domain::commands::emergency_contacts::AddEmergencyContactCommand;
use crate::domain::emergency_contact_service::GroupedContacts;

pub struct EmergencyContactMapper;

impl EmergencyContactMapper {
    pub fn to_add_command(request: AddEmergencyContactRequest) -> AddEmergencyContactCommand {
        AddEmergencyContactCommand {
            name: request.name,
            phone: request.phone,
            relationship: request.relationship,
            email: request.email,
            address: request.address,
            notes: request.notes,
            primary: request.primary,
            date: request.date,
        }
    }

    pub fn to_add_response(contact: RecordView<EmergencyContact>) -> EmergencyContactResponse {
        EmergencyContactResponse {
            success_message: format!("Added {} to emergency contacts", contact.record.name),
            contact,
        }
    }

    pub fn to_list_response(grouped: GroupedContacts) -> EmergencyContactListResponse {
        EmergencyContactListResponse {
            primary: grouped.primary,
            other: grouped.other,
        }
    }
}
