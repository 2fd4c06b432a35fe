/// Shared look of the two lead forms.
pub const FORM_CSS: &str = r#"
    .form-page {
        min-height: 100vh;
        background: #0A0F1C;
        color: #fff;
        padding: 3rem 1rem;
        font-family: 'Inter', sans-serif;
    }
    .form-shell { max-width: 36rem; margin: 0 auto; }
    .form-shell.wide { max-width: 48rem; }
    .back-link {
        display: inline-flex;
        align-items: center;
        color: #60A5FA;
        text-decoration: none;
        margin-bottom: 2rem;
    }
    .back-link:hover { color: #93C5FD; }
    .form-card {
        padding: 2rem;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
        backdrop-filter: blur(12px);
    }
    .form-title {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 0.5rem;
    }
    .form-title h1 { font-size: 1.875rem; font-weight: 700; margin: 0; }
    .form-title img { width: 2rem; height: 2rem; }
    .form-intro { color: #9CA3AF; margin-bottom: 2rem; }
    .form-card form { display: flex; flex-direction: column; gap: 1.5rem; }
    .form-row {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 1.5rem;
    }
    .form-field label {
        display: block;
        font-size: 0.875rem;
        font-weight: 500;
        color: #D1D5DB;
        margin-bottom: 0.5rem;
    }
    .required { color: #EF4444; }
    .form-field input,
    .form-field select,
    .form-field textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem 1rem;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.5rem;
        color: #fff;
        font: inherit;
        outline: none;
    }
    .form-field select option { background: #0A0F1C; }
    .form-field input:focus,
    .form-field select:focus,
    .form-field textarea:focus { border-color: rgba(59, 130, 246, 0.5); }
    .char-count { font-size: 0.875rem; color: #9CA3AF; margin-top: 0.25rem; }
    .char-count.met { color: #34D399; }
    .form-note { font-size: 0.875rem; color: #9CA3AF; }
    .form-note a { color: #60A5FA; text-decoration: none; }
    .button-primary {
        width: 100%;
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 9999px;
        background: linear-gradient(to right, #3B82F6, #2563EB);
        color: #fff;
        font-weight: 500;
        cursor: pointer;
    }
    .button-primary:disabled { opacity: 0.6; cursor: not-allowed; }
"#;
