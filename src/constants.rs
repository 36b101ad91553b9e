pub const APP_TITLE: &str = "Johnson-Cook Material Law Curve";
pub const INIT_WINDOW_SIZE: [u32; 2] = [1100, 700]; // [width, height]
pub const CONTROL_WIDTH: f32 = 320.0;

pub const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(32, 35, 38);

pub const CURVE_COLORS: [egui::Color32; 6] = [
    egui::Color32::LIGHT_BLUE,
    egui::Color32::ORANGE,
    egui::Color32::LIGHT_GREEN,
    egui::Color32::LIGHT_RED,
    egui::Color32::LIGHT_YELLOW,
    egui::Color32::from_rgb(200, 140, 220),
];

pub const DEFAULT_A: &str = "792";
pub const DEFAULT_B: &str = "510";
pub const DEFAULT_C: &str = "0.014";
pub const DEFAULT_N: &str = "0.26";
pub const DEFAULT_STRAIN_RATE: &str = "1";
pub const DEFAULT_REFERENCE_STRAIN_RATE: &str = "1";
pub const DEFAULT_CURVE_NAME: &str = "";

pub const DEFAULT_CURVE_LABEL: &str = "Johnson-Cook Model";
pub const CURVE_NAME_LABEL: &str = "Curve Name";
pub const PLOT_BUTTON_TEXT: &str = "Plot Curve";
pub const ERROR_DIALOG_TITLE: &str = "Invalid Input";

pub const CHART_TITLE: &str = "Johnson-Cook Material Law Curve";
pub const STRAIN_AXIS_LABEL: &str = "Equivalent Plastic Strain";
pub const STRESS_AXIS_LABEL: &str = "Equivalent Flow Stress (MPa)";

pub const MIN_STRAIN: f64 = 0.0;
pub const MAX_STRAIN: f64 = 1.0;
pub const NUM_STRAIN_POINTS: usize = 500;
