// User-facing copy - single source of truth for strings asserted in tests
pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const MSG_CAMERA_UNAVAILABLE: &str =
    "Unable to access camera. Please ensure camera permissions are granted and try again.";
pub const MSG_DISCLAIMER_CBC: &str = "This tool is for informational purposes only and not a substitute for professional medical advice. Consult a healthcare provider for diagnosis.";
pub const MSG_DISCLAIMER_VISUAL: &str = "This visual screening tool is for preliminary assessment only and not a substitute for professional medical advice. Consult a healthcare provider for diagnosis.";
pub const MSG_REMINDER_CBC: &str = "These results are for screening purposes only. Please consult with a healthcare professional for proper diagnosis and treatment.";
pub const MSG_REMINDER_VISUAL: &str = "This is a preliminary screening tool only. Please consult with a healthcare professional for proper diagnosis and treatment, especially if high risk is indicated.";

// Label returned by the CBC model for a positive classification
pub const LABEL_ANEMIC: &str = "Anemic";

// Camera capture settings
pub const CAMERA_WIDTH: u32 = 640;
pub const CAMERA_HEIGHT: u32 = 480;
pub const CAMERA_FACING_MODE: &str = "user";
pub const CAPTURE_MIME_TYPE: &str = "image/jpeg";
pub const CAPTURE_FORM_FIELD: &str = "file";
pub const CAPTURE_FILENAME: &str = "conjunctiva.jpg";

// Toast lifetime
pub const TOAST_DURATION_MS: u32 = 4000;

// Root containers
pub const ID_APP_ROOT: &str = "app-root";
pub const ID_PAGE_CONTAINER: &str = "page-container";
pub const ID_NAV_HOME: &str = "nav-home";
pub const ID_NAV_CBC: &str = "nav-cbc";
pub const ID_NAV_VISUAL: &str = "nav-visual";

// Page containers
pub const ID_HOME_PAGE: &str = "home-page";
pub const ID_CBC_PAGE: &str = "cbc-page";
pub const ID_VISUAL_PAGE: &str = "visual-page";

// CBC page elements
pub const ID_CBC_FORM: &str = "cbc-form";
pub const ID_CBC_GENDER_MALE: &str = "gender-male";
pub const ID_CBC_GENDER_FEMALE: &str = "gender-female";
pub const ID_CBC_SUBMIT: &str = "cbc-submit";
pub const ID_CBC_ERROR: &str = "cbc-error";
pub const ID_CBC_RESULT: &str = "cbc-result";
pub const ID_CBC_RESULT_LABEL: &str = "cbc-result-label";
pub const ID_CBC_RESULT_ANEMIC: &str = "cbc-result-anemic";
pub const ID_CBC_RESULT_NON_ANEMIC: &str = "cbc-result-non-anemic";
pub const ID_CBC_RESULT_TIME: &str = "cbc-result-time";
pub const ID_CBC_RESET: &str = "cbc-reset";

// Visual page elements
pub const ID_VISUAL_CAMERA_SECTION: &str = "visual-camera-section";
pub const ID_VISUAL_CAMERA_FRAME: &str = "visual-camera-frame";
pub const ID_VISUAL_VIDEO: &str = "visual-camera";
pub const ID_VISUAL_CAMERA_ERROR: &str = "visual-camera-error";
pub const ID_VISUAL_CAMERA_ERROR_TEXT: &str = "visual-camera-error-text";
pub const ID_VISUAL_CAMERA_RETRY: &str = "visual-camera-retry";
pub const ID_VISUAL_CAPTURE: &str = "visual-capture";
pub const ID_VISUAL_PREVIEW: &str = "visual-preview";
pub const ID_VISUAL_PREVIEW_IMG: &str = "visual-preview-img";
pub const ID_VISUAL_RETAKE: &str = "visual-retake";
pub const ID_VISUAL_LOADING: &str = "visual-loading";
pub const ID_VISUAL_ERROR: &str = "visual-error";
pub const ID_VISUAL_RESULT: &str = "visual-result";
pub const ID_VISUAL_RESULT_IMG: &str = "visual-result-img";
pub const ID_VISUAL_RESULT_LABEL: &str = "visual-result-label";
pub const ID_VISUAL_RESULT_SCORE: &str = "visual-result-score";
pub const ID_VISUAL_RESULT_TIME: &str = "visual-result-time";
pub const ID_VISUAL_RETAKE_AFTER_RESULT: &str = "visual-retake-after-result";

// CSS classes
pub const CSS_HIDDEN: &str = "hidden";
pub const CSS_VISIBLE: &str = "visible";
pub const CSS_NAV_LINK: &str = "nav-link";
pub const CSS_NAV_LINK_ACTIVE: &str = "nav-link active";
pub const CSS_OUT_OF_RANGE: &str = "out-of-range";
pub const CSS_TONE_DANGER: &str = "tone-danger";
pub const CSS_TONE_WARNING: &str = "tone-warning";
pub const CSS_TONE_OK: &str = "tone-ok";
