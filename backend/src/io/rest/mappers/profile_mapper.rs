use shared::UpdateFamilyInfoRequest;

use crate::domain::commands::profile::UpdateFamilyInfoCommand;

pub struct ProfileMapper;

impl ProfileMapper {
    pub fn to_update_command(request: UpdateFamilyInfoRequest) -> UpdateFamilyInfoCommand {
        UpdateFamilyInfoCommand {
            parent_name: request.parent_name,
            family_size: request.family_size,
            location: request.location,
            primary_language: request.primary_language,
            support_network: request.support_network,
            children_info: request.children_info,
        }
    }
}
