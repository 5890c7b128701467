use crate::domain::entities::record::{
    count_value, non_empty, text_value, Count, Field, RecordKind, ReportRecord,
};

type F = Field<Region>;

/// Per-region summary counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    pub region_name: Option<String>,
    pub total_agents: Option<Count>,
    pub total_regional_admins: Option<Count>,
    pub total_dispatch_tasks: Option<Count>,
    pub total_ongoing_tasks: Option<Count>,
    pub total_completed_tasks: Option<Count>,
    pub region_id: Option<String>,
    pub region_code: Option<String>,
    pub total_users: Option<Count>,
    pub total_national_admins: Option<Count>,
    pub total_tasks: Option<Count>,
    pub total_ppir_tasks: Option<Count>,
    pub total_unknown_tasks: Option<Count>,
}

impl ReportRecord for Region {
    const KIND: RecordKind = RecordKind::Region;

    const FIELDS: &'static [Field<Self>] = &[
        F::new("Region Name", |r| text_value(&r.region_name), |r, v| {
            r.region_name = non_empty(v)
        }),
        F::new("Total Agents", |r| count_value(&r.total_agents), |r, v| {
            r.total_agents = Count::parse(v)
        }),
        F::new(
            "Total Regional Admins",
            |r| count_value(&r.total_regional_admins),
            |r, v| r.total_regional_admins = Count::parse(v),
        ),
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
        F::new("Region ID", |r| text_value(&r.region_id), |r, v| {
            r.region_id = non_empty(v)
        }),
        F::new("Region Code", |r| text_value(&r.region_code), |r, v| {
            r.region_code = non_empty(v)
        }),
        F::new("Total Users", |r| count_value(&r.total_users), |r, v| {
            r.total_users = Count::parse(v)
        }),
        F::new(
            "Total National Admins",
            |r| count_value(&r.total_national_admins),
            |r, v| r.total_national_admins = Count::parse(v),
        ),
        F::new("Total Tasks", |r| count_value(&r.total_tasks), |r, v| {
            r.total_tasks = Count::parse(v)
        }),
        F::new(
            "Total PPIR Tasks",
            |r| count_value(&r.total_ppir_tasks),
            |r, v| r.total_ppir_tasks = Count::parse(v),
        ),
        F::new(
            "Total Unknown Tasks",
            |r| count_value(&r.total_unknown_tasks),
            |r, v| r.total_unknown_tasks = Count::parse(v),
        ),
    ];

    const DEFAULT_COLUMNS: &'static [&'static str] = &[
        "Region Name",
        "Total Agents",
        "Total Regional Admins",
        "Total Dispatch Tasks",
        "Total Ongoing Tasks",
        "Total Completed Tasks",
    ];

    const OPTIONAL_COLUMNS: &'static [&'static str] = &[
        "Region ID",
        "Region Code",
        "Total Users",
        "Total National Admins",
        "Total Tasks",
        "Total PPIR Tasks",
        "Total Unknown Tasks",
    ];
}
