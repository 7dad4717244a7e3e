//! Prescription assembly: from edited items to document-generation data.

use crate::models::{
    DoctorInfo, PatientInfo, PrescriptionContext, PrescriptionGenerationData, PrescriptionItem,
    PrescriptionType, RouteEntry, RouteGroup,
};

/// Bucket label for medications without an administration route.
pub const DEFAULT_ROUTE: &str = "Interno";

/// Group the selected items by administration route.
///
/// Group order follows the first appearance of each route; entries inside
/// a group keep their original order. Items without a route land in the
/// [`DEFAULT_ROUTE`] bucket instead of being dropped.
pub fn group_by_route(items: &[PrescriptionItem]) -> Vec<RouteGroup> {
    let mut groups: Vec<RouteGroup> = Vec::new();

    for item in items.iter().filter(|i| i.selected) {
        let route = if item.medication.route.trim().is_empty() {
            DEFAULT_ROUTE
        } else {
            item.medication.route.as_str()
        };

        let entry = RouteEntry {
            name: item.medication.name.clone(),
            presentation: item.medication.presentation.clone(),
            posology: item.custom_posology.clone(),
            quantity: item.quantity.clone(),
        };

        match groups.iter_mut().find(|g| g.route == route) {
            Some(group) => group.entries.push(entry),
            None => groups.push(RouteGroup {
                route: route.to_string(),
                entries: vec![entry],
            }),
        }
    }

    groups
}

/// Assemble everything the document renderers need.
///
/// Built fresh on every generate action; never persisted directly.
pub fn build_generation_data(
    items: &[PrescriptionItem],
    doctor: &DoctorInfo,
    patient: &PatientInfo,
    prescription_type: PrescriptionType,
    context: PrescriptionContext,
    issue_date: &str,
) -> PrescriptionGenerationData {
    PrescriptionGenerationData {
        prescription_type,
        context,
        issue_date: issue_date.to_string(),
        doctor: doctor.clone(),
        patient: patient.clone(),
        medications_by_route: group_by_route(items),
    }
}

/// Today's date in the printed dd/mm/yyyy format.
pub fn issue_date_today() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}
