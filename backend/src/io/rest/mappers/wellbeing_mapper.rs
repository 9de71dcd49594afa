use shared::{CheckInResponse, RecordCheckInRequest};

use crate::domain::commands::wellbeing::RecordCheckInCommand;
use crate::domain::wellbeing_service::RecordedCheckIn;

pub struct WellbeingMapper;

impl WellbeingMapper {
    pub fn to_record_command(request: RecordCheckInRequest) -> RecordCheckInCommand {
        RecordCheckInCommand {
            stress_level: request.stress_level,
            energy_level: request.energy_level,
            mood: request.mood,
            sleep_quality: request.sleep_quality,
            support_feeling: request.support_feeling,
            coping_ability: request.coping_ability,
            additional_concerns: request.additional_concerns,
            date: request.date,
        }
    }

    pub fn to_check_in_response(recorded: RecordedCheckIn) -> CheckInResponse {
        CheckInResponse {
            check_in: recorded.check_in,
            needs_support: recorded.needs_support,
            suggestion: recorded.suggestion,
        }
    }
}
