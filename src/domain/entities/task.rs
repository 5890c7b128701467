use crate::domain::entities::record::{non_empty, text_value, Field, RecordKind, ReportRecord};

type F = Field<Task>;

/// One row of the task report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    pub region: Option<String>,
    pub task_number: Option<String>,
    pub agent: Option<String>,
    pub farmer_name: Option<String>,
    pub insurance_id: Option<String>,
    pub ppi_assignment_id: Option<String>,
    pub task_status: Option<String>,
    pub inspector: Option<String>,
    pub service_group: Option<String>,
    pub service_type: Option<String>,
    pub assignee: Option<String>,
    pub assignment_id: Option<String>,
    pub address: Option<String>,
    pub farmer_type: Option<String>,
    pub mobile_no: Option<String>,
    pub group_name: Option<String>,
    pub group_address: Option<String>,
    pub lender_name: Option<String>,
    pub lender_address: Option<String>,
    pub cic_no: Option<String>,
    pub farm_location: Option<String>,
    pub name_insured: Option<String>,
    pub name_iuia: Option<String>,
}

impl ReportRecord for Task {
    const KIND: RecordKind = RecordKind::Task;

    const FIELDS: &'static [Field<Self>] = &[
        F::new("Region", |r| text_value(&r.region), |r, v| {
            r.region = non_empty(v)
        }),
        F::new("Task Number", |r| text_value(&r.task_number), |r, v| {
            r.task_number = non_empty(v)
        }),
        F::new("Agent", |r| text_value(&r.agent), |r, v| {
            r.agent = non_empty(v)
        }),
        F::new("Farmer Name", |r| text_value(&r.farmer_name), |r, v| {
            r.farmer_name = non_empty(v)
        }),
        F::new("Insurance ID", |r| text_value(&r.insurance_id), |r, v| {
            r.insurance_id = non_empty(v)
        }),
        F::new(
            "PPI Assignment ID",
            |r| text_value(&r.ppi_assignment_id),
            |r, v| r.ppi_assignment_id = non_empty(v),
        ),
        F::new("Task Status", |r| text_value(&r.task_status), |r, v| {
            r.task_status = non_empty(v)
        }),
        F::new("Inspector", |r| text_value(&r.inspector), |r, v| {
            r.inspector = non_empty(v)
        }),
        F::new("Service Group", |r| text_value(&r.service_group), |r, v| {
            r.service_group = non_empty(v)
        }),
        F::new("Service Type", |r| text_value(&r.service_type), |r, v| {
            r.service_type = non_empty(v)
        }),
        F::new("Assignee", |r| text_value(&r.assignee), |r, v| {
            r.assignee = non_empty(v)
        }),
        F::new("Assignment ID", |r| text_value(&r.assignment_id), |r, v| {
            r.assignment_id = non_empty(v)
        }),
        F::new("Address", |r| text_value(&r.address), |r, v| {
            r.address = non_empty(v)
        }),
        F::new("Farmer Type", |r| text_value(&r.farmer_type), |r, v| {
            r.farmer_type = non_empty(v)
        }),
        F::new("Mobile No", |r| text_value(&r.mobile_no), |r, v| {
            r.mobile_no = non_empty(v)
        }),
        F::new("Group Name", |r| text_value(&r.group_name), |r, v| {
            r.group_name = non_empty(v)
        }),
        F::new("Group Address", |r| text_value(&r.group_address), |r, v| {
            r.group_address = non_empty(v)
        }),
        F::new("Lender Name", |r| text_value(&r.lender_name), |r, v| {
            r.lender_name = non_empty(v)
        }),
        F::new("Lender Address", |r| text_value(&r.lender_address), |r, v| {
            r.lender_address = non_empty(v)
        }),
        F::new("CIC No", |r| text_value(&r.cic_no), |r, v| {
            r.cic_no = non_empty(v)
        }),
        F::new("Farm Location", |r| text_value(&r.farm_location), |r, v| {
            r.farm_location = non_empty(v)
        }),
        F::new("Name Insured", |r| text_value(&r.name_insured), |r, v| {
            r.name_insured = non_empty(v)
        }),
        F::new("Name IUIA", |r| text_value(&r.name_iuia), |r, v| {
            r.name_iuia = non_empty(v)
        }),
    ];

    const DEFAULT_COLUMNS: &'static [&'static str] = &[
        "Region",
        "Task Number",
        "Agent",
        "Farmer Name",
        "Insurance ID",
        "PPI Assignment ID",
        "Task Status",
    ];

    const OPTIONAL_COLUMNS: &'static [&'static str] = &[
        "Inspector",
        "Service Group",
        "Service Type",
        "Assignee",
        "Assignment ID",
        "Address",
        "Farmer Type",
        "Mobile No",
        "Group Name",
        "Group Address",
        "Lender Name",
        "Lender Address",
        "CIC No",
        "Farm Location",
        "Name Insured",
        "Name IUIA",
    ];
}
