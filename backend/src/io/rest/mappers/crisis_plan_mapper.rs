use shared::{CreateCrisisPlanRequest, CrisisPlan, CrisisPlanResponse, RecordView};

use crate::domain::commands::crisis_plans::CreateCrisisPlanCommand;

pub struct CrisisPlanMapper;

impl CrisisPlanMapper {
    pub fn to_create_command(request: CreateCrisisPlanRequest) -> CreateCrisisPlanCommand {
        CreateCrisisPlanCommand {
            name: request.name,
            crisis_type: request.crisis_type,
            warning_signs: request.warning_signs,
            immediate_steps: request.immediate_steps,
            contacts_to_call: request.contacts_to_call,
            resources_needed: request.resources_needed,
            notes: request.notes,
            date: request.date,
        }
    }

    pub fn to_response(plan: RecordView<CrisisPlan>, success_message: String) -> CrisisPlanResponse {
        CrisisPlanResponse { plan, success_message }
    }
}
