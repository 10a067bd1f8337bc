use wasm_bindgen::JsValue;
use web_sys::Document;

const STYLE_ID: &str = "app-styles";

const CSS: &str = "
body{margin:0;background:#111827;color:#f3f4f6;font-family:system-ui,Arial,Helvetica,sans-serif}
.header{display:flex;align-items:center;justify-content:space-between;padding:12px 24px;background:#1f2937;border-bottom:1px solid #374151}
.header h1{font-size:20px;margin:0}
.nav{display:flex;gap:16px}
.nav-link{color:#93c5fd;text-decoration:none;font-weight:500}
.nav-link.active{color:#fff;border-bottom:2px solid #3b82f6}
.page-container{max-width:720px;margin:0 auto;padding:24px 16px}
.hidden{display:none !important}
.card{background:#1f2937;border:1px solid #374151;border-radius:16px;padding:32px;box-shadow:0 10px 25px rgba(0,0,0,.3)}
.card h2{margin-top:0;text-align:center}
.subtitle{text-align:center;color:#d1d5db;margin-bottom:24px}
.back-link{display:inline-block;margin-bottom:16px;color:#60a5fa;text-decoration:none}
.disclaimer{margin-bottom:24px;padding:12px 16px;background:#422006;border-left:4px solid #facc15;color:#fde68a;font-size:14px;border-radius:0 8px 8px 0}
.instructions{margin-bottom:24px;padding:12px 16px;background:#1e3a8a;border-radius:8px;color:#dbeafe;font-size:14px}
.field{margin-bottom:20px}
.field label{display:block;font-size:14px;color:#d1d5db;margin-bottom:6px}
.field input[type=number]{width:100%;box-sizing:border-box;padding:8px 12px;background:#374151;border:1px solid #4b5563;color:#fff;border-radius:6px}
.field input.out-of-range{border-color:#f59e0b}
.hint{font-size:12px;color:#9ca3af;margin-top:4px}
.radio-group{display:flex;gap:24px}
.radio-group label{display:inline;margin-left:6px}
.btn{padding:10px 24px;border:none;border-radius:8px;color:#fff;font-weight:600;cursor:pointer}
.btn:disabled{background:#6b7280 !important;cursor:not-allowed}
.btn-primary{background:#2563eb;width:100%}
.btn-success{background:#16a34a}
.btn-secondary{background:#4b5563}
.btn-danger{background:#dc2626}
.btn-link{display:inline-block;padding:10px 24px;border-radius:8px;color:#fff;text-decoration:none;font-weight:600}
.actions{margin-top:24px;display:flex;gap:16px;justify-content:center}
.banner-error{margin-top:16px;padding:12px 16px;background:#7f1d1d;border:1px solid #b91c1c;border-radius:6px;color:#fecaca;font-size:14px}
.result{margin-top:32px;padding:24px;background:#374151;border:1px solid #4b5563;border-radius:8px}
.result-row{display:flex;justify-content:space-between;align-items:center;margin-bottom:12px}
.result-row .value{font-size:18px;font-weight:700}
.reminder{margin-top:16px;padding:12px;background:#1e3a8a;border-radius:8px;color:#bfdbfe;font-size:14px}
.tone-danger{color:#dc2626}
.tone-warning{color:#ca8a04}
.tone-ok{color:#16a34a}
.camera-frame{position:relative}
.camera-frame video{width:100%;border-radius:8px;background:#000}
.overlay-guide{position:absolute;inset:0;display:flex;align-items:center;justify-content:center;pointer-events:none}
.overlay-guide span{border:2px dashed #fff;border-radius:8px;padding:48px 40px;color:#fff;font-size:14px}
.camera-error{padding:32px;background:#450a0a;border:2px dashed #fca5a5;border-radius:8px;text-align:center;color:#fca5a5}
.preview img{width:100%;border-radius:8px;margin-bottom:16px}
.thumb{display:block;width:128px;height:96px;object-fit:cover;border-radius:8px;margin:0 auto 16px}
.loading{text-align:center;padding:32px 0;font-size:18px}
.spinner{display:inline-block;width:16px;height:16px;border:2px solid #fff;border-top-color:transparent;border-radius:50%;animation:spin 1s linear infinite;vertical-align:middle;margin-right:8px}
.home-links{display:grid;grid-template-columns:1fr 1fr;gap:16px;margin-top:24px}
.home-links a{display:block;padding:24px;background:#374151;border-radius:12px;color:#fff;text-decoration:none}
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999}
.toast{padding:10px 16px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards}
.toast-error{background:#dc2626}
.toast-warning{background:#d97706}
@keyframes spin{to{transform:rotate(360deg)}}
@keyframes toast-in{to{opacity:1}}
";

/// Append the application stylesheet to `<head>` once.
pub fn inject(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }

    let style = document.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(CSS));

    if let Some(head) = document.head() {
        head.append_child(&style)?;
    } else {
        // fallback – append to body
        document
            .body()
            .ok_or_else(|| JsValue::from_str("No body found"))?
            .append_child(&style)?;
    }
    Ok(())
}
