use shared::{
    MilestoneListRequest, MilestoneResponse, MilestoneShare, RecordView, ShareMilestoneRequest,
};

use crate::domain::commands::milestones::{MilestoneListQuery, ShareMilestoneCommand};

pub struct MilestoneMapper;

impl MilestoneMapper {
    pub fn to_share_command(request: ShareMilestoneRequest) -> ShareMilestoneCommand {
        ShareMilestoneCommand {
            text: request.text,
            milestone_type: request.milestone_type,
            child_age: request.child_age,
            public: request.public,
            date: request.date,
        }
    }

    pub fn to_list_query(request: MilestoneListRequest) -> MilestoneListQuery {
        MilestoneListQuery {
            limit: request.limit,
            public_only: request.public_only,
        }
    }

    pub fn to_share_response(milestone: RecordView<MilestoneShare>) -> MilestoneResponse {
        let success_message = if milestone.record.public {
            "Milestone shared with the community!".to_string()
        } else {
            "Milestone saved privately".to_string()
        };
        MilestoneResponse {
            milestone,
            success_message,
        }
    }
}
