/// Site-wide rules shared by every page. Page-specific rules live in a
/// `<style>` block inside the page component.
pub const BASE_CSS: &str = r#"
body {
    margin: 0;
    background: #1a1a1a;
    color: #fff;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
main {
    min-height: 100vh;
    padding-top: 74px;
}
.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    background: rgba(26, 26, 26, 0.9);
    backdrop-filter: blur(10px);
    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    color: #fff;
    font-weight: 700;
    font-size: 1.4rem;
    text-decoration: none;
}
.nav-right {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}
.nav-link, .text-link {
    color: #999;
    text-decoration: none;
}
.nav-link:hover, .text-link:hover {
    color: #7EB2FF;
}
.nav-cta, .primary-button {
    background: #1E90FF;
    color: #fff;
    border: none;
    border-radius: 8px;
    padding: 0.6rem 1.2rem;
    text-decoration: none;
    cursor: pointer;
}
.secondary-button {
    background: transparent;
    color: #7EB2FF;
    border: 1px solid rgba(30, 144, 255, 0.4);
    border-radius: 8px;
    padding: 0.6rem 1.2rem;
    cursor: pointer;
}
.burger-menu {
    display: none;
    background: none;
    border: none;
    cursor: pointer;
}
.burger-menu span {
    display: block;
    width: 24px;
    height: 2px;
    margin: 5px 0;
    background: #fff;
}
.page-hero {
    text-align: center;
    padding: 4rem 2rem 2rem;
}
.page-hero h1 {
    font-size: 2.6rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.page-hero p {
    color: #999;
    max-width: 640px;
    margin: 0 auto;
}
.page-section {
    max-width: 1100px;
    margin: 0 auto;
    padding: 2rem;
}
.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 1.5rem;
}
.card {
    background: rgba(30, 30, 30, 0.7);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 16px;
    padding: 1.5rem;
}
.card h3 {
    color: #7EB2FF;
    margin-top: 0.5rem;
}
.card p, .muted {
    color: #999;
    line-height: 1.6;
}
.icon {
    font-style: normal;
    font-size: 1.8rem;
}
.tab-bar {
    display: flex;
    gap: 0.5rem;
    flex-wrap: wrap;
    margin-bottom: 1.5rem;
}
.tab {
    background: rgba(0, 0, 0, 0.3);
    border: 1px solid rgba(30, 144, 255, 0.15);
    color: #999;
    border-radius: 999px;
    padding: 0.4rem 1rem;
    cursor: pointer;
}
.tab.active {
    background: #1E90FF;
    color: #fff;
}
.search-input {
    width: 100%;
    padding: 0.8rem 1rem;
    border-radius: 8px;
    border: 1px solid rgba(30, 144, 255, 0.2);
    background: rgba(0, 0, 0, 0.3);
    color: #fff;
    margin-bottom: 1.5rem;
}
.form-panel {
    background: rgba(30, 30, 30, 0.7);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 16px;
    padding: 2rem;
    max-width: 640px;
    margin: 0 auto;
}
.form-field {
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
    margin-bottom: 1.2rem;
}
.form-field label {
    color: #ddd;
}
.form-field input, .form-field textarea, .form-field select {
    padding: 0.7rem;
    border-radius: 8px;
    border: 1px solid rgba(30, 144, 255, 0.2);
    background: rgba(0, 0, 0, 0.3);
    color: #fff;
}
.checkbox-field label {
    display: flex;
    gap: 0.6rem;
    align-items: center;
}
.has-error input, .has-error textarea, .has-error select {
    border-color: #ff6b6b;
}
.field-error, .error-message {
    color: #ff6b6b;
    font-size: 0.9rem;
}
.success-message {
    color: #69db7c;
}
.required-mark {
    color: #ff6b6b;
}
.submit-button {
    width: 100%;
    padding: 0.9rem;
    border: none;
    border-radius: 8px;
    background: #1E90FF;
    color: #fff;
    font-size: 1rem;
    cursor: pointer;
}
.submit-button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
.loading-spinner {
    display: inline-block;
    width: 16px;
    height: 16px;
    border: 3px solid rgba(255,255,255,.3);
    border-radius: 50%;
    border-top-color: #fff;
    animation: spin 1s ease-in-out infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.confirmation-panel {
    text-align: center;
    padding: 2rem;
}
.confirmation-check {
    font-size: 3rem;
    color: #69db7c;
}
.site-footer {
    border-top: 1px solid rgba(30, 144, 255, 0.1);
    padding: 2rem;
    color: #777;
}
.footer-columns {
    max-width: 1100px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
    gap: 1.5rem;
}
.footer-columns a {
    display: block;
    color: #999;
    text-decoration: none;
    margin-bottom: 0.4rem;
}
@media (max-width: 768px) {
    .burger-menu {
        display: block;
    }
    .nav-right {
        display: none;
    }
    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: rgba(26, 26, 26, 0.98);
        padding: 1rem;
    }
    .page-hero h1 {
        font-size: 2rem;
    }
}
"#;
