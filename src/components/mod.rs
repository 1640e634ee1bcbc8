//! UI components: the report form, its field-sets, result boxes, the crew
//! roster, and the profit widget.

pub mod crew_roster;
pub mod fieldset;
pub mod profit;
pub mod report_form;
pub mod result_box;
