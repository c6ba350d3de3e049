use services::ProgressSnapshot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressBarVm {
    pub percent_label: String,
    pub items_label: String,
    pub bar_style: String,
}

impl From<ProgressSnapshot> for ProgressBarVm {
    fn from(snapshot: ProgressSnapshot) -> Self {
        Self {
            percent_label: format!("{}%", snapshot.percent),
            items_label: format!("{} / {} items", snapshot.checked, snapshot.total),
            bar_style: format!("width: {}%", snapshot.percent),
        }
    }
}
