use serde::{Deserialize, Serialize};

use crate::ui::components::line_chart::{ChartMetrics, LabellingMode};

/// Host-loadable chart settings.
///
/// Colours live in [`LineChartAppearance`](crate::ui::components::line_chart::LineChartAppearance)
/// and are configured in code; this covers the numeric layout and labelling
/// parameters that are worth keeping in a settings file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub labelling: LabellingMode,
    pub metrics: ChartMetrics,
}
