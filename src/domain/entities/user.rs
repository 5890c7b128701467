use crate::domain::entities::record::{
    count_value, non_empty, text_value, Count, Field, RecordKind, ReportRecord,
};

type F = Field<User>;

/// An inspector with their task counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub region_name: Option<String>,
    pub inspector_name: Option<String>,
    pub role: Option<String>,
    pub total_dispatch_tasks: Option<Count>,
    pub total_ongoing_tasks: Option<Count>,
    pub total_completed_tasks: Option<Count>,
    pub total_tasks: Option<Count>,
    pub id: Option<String>,
    pub local_id: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
}

impl ReportRecord for User {
    const KIND: RecordKind = RecordKind::User;

    const FIELDS: &'static [Field<Self>] = &[
        F::new("Region Name", |r| text_value(&r.region_name), |r, v| {
            r.region_name = non_empty(v)
        }),
        F::new(
            "Inspector Name",
            |r| text_value(&r.inspector_name),
            |r, v| r.inspector_name = non_empty(v),
        ),
        F::new("Role", |r| text_value(&r.role), |r, v| {
            r.role = non_empty(v)
        }),
        F::new(
            "Total Dispatch Tasks",
            |r| count_value(&r.total_dispatch_tasks),
            |r, v| r.total_dispatch_tasks = Count::parse(v),
        ),
        F::new(
            "Total Ongoing Tasks",
            |r| count_value(&r.total_ongoing_tasks),
            |r, v| r.total_ongoing_tasks = Count::parse(v),
        ),
        F::new(
            "Total Completed Tasks",
            |r| count_value(&r.total_completed_tasks),
            |r, v| r.total_completed_tasks = Count::parse(v),
        ),
        F::new("Total Tasks", |r| count_value(&r.total_tasks), |r, v| {
            r.total_tasks = Count::parse(v)
        }),
        F::new("ID", |r| text_value(&r.id), |r, v| r.id = non_empty(v)),
        F::new("Local ID", |r| text_value(&r.local_id), |r, v| {
            r.local_id = non_empty(v)
        }),
        F::new("Email", |r| text_value(&r.email), |r, v| {
            r.email = non_empty(v)
        }),
        F::new("Mobile Number", |r| text_value(&r.mobile_number), |r, v| {
            r.mobile_number = non_empty(v)
        }),
    ];

    const DEFAULT_COLUMNS: &'static [&'static str] = &[
        "Region Name",
        "Inspector Name",
        "Role",
        "Total Dispatch Tasks",
        "Total Ongoing Tasks",
        "Total Completed Tasks",
        "Total Tasks",
    ];

    const OPTIONAL_COLUMNS: &'static [&'static str] = &["ID", "Local ID", "Email", "Mobile Number"];
}
