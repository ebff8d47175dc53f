//! Global CSS styles for the portfolio page.
//!
//! Light theme by default; `[data-theme="dark"]` flips the custom
//! properties. Keyframes for the preloader spinner, typing cursor,
//! project-card fade-in, and particle drift live here too.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root, [data-theme="light"] {
  --bg: #fafafa;
  --surface: #ffffff;
  --text: #1c1c1e;
  --text-muted: rgba(28, 28, 30, 0.6);
  --primary: #3b82f6;
  --primary-soft: rgba(59, 130, 246, 0.15);
  --accent: #f59e0b;
  --success: #22c55e;
  --danger: #ef4444;
  --shadow: 0 4px 16px rgba(0, 0, 0, 0.08);

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

[data-theme="dark"] {
  --bg: #101014;
  --surface: #1a1a20;
  --text: #f2f2f5;
  --text-muted: rgba(242, 242, 245, 0.6);
  --primary-soft: rgba(59, 130, 246, 0.25);
  --shadow: 0 4px 16px rgba(0, 0, 0, 0.4);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

.portfolio-root {
  font-family: 'Inter', 'Segoe UI', system-ui, sans-serif;
  background: var(--bg);
  color: var(--text);
  line-height: 1.7;
  height: 100vh;
  overflow: hidden;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.page {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
}

section {
  max-width: 1080px;
  margin: 0 auto;
  padding: 6rem 2rem 4rem;
}

.section-title {
  font-size: 2rem;
  margin-bottom: 1.5rem;
}

/* === Preloader === */
.preloader {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--bg);
  opacity: 1;
  transition: opacity var(--transition-normal), visibility var(--transition-normal);
}

.preloader.hidden {
  opacity: 0;
  visibility: hidden;
  pointer-events: none;
}

.preloader-spinner {
  width: 48px;
  height: 48px;
  border: 4px solid var(--primary-soft);
  border-top-color: var(--primary);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Scroll Progress === */
.scroll-progress {
  position: fixed;
  top: 0;
  left: 0;
  height: 3px;
  z-index: 60;
  background: var(--primary);
  transition: width 80ms linear;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.navbar.scrolled {
  background: var(--surface);
  box-shadow: var(--shadow);
}

.navbar-inner {
  max-width: 1080px;
  margin: 0 auto;
  padding: 0.75rem 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--text);
  text-decoration: none;
}

.nav-menu {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  color: var(--text-muted);
  text-decoration: none;
  font-size: 0.95rem;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.theme-toggle {
  border: none;
  background: none;
  color: var(--text);
  cursor: pointer;
  padding: 0.4rem;
  border-radius: 50%;
  display: flex;
  transition: background var(--transition-fast);
}

.theme-toggle:hover {
  background: var(--primary-soft);
}

.nav-toggle {
  display: none;
  flex-direction: column;
  gap: 4px;
  border: none;
  background: none;
  cursor: pointer;
  padding: 0.4rem;
}

.nav-toggle-bar {
  width: 22px;
  height: 2px;
  background: var(--text);
  transition: transform var(--transition-fast), opacity var(--transition-fast);
}

.nav-toggle.active .nav-toggle-bar:nth-child(1) { transform: translateY(6px) rotate(45deg); }
.nav-toggle.active .nav-toggle-bar:nth-child(2) { opacity: 0; }
.nav-toggle.active .nav-toggle-bar:nth-child(3) { transform: translateY(-6px) rotate(-45deg); }

@media (max-width: 720px) {
  .nav-toggle { display: flex; }

  .nav-menu {
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    background: var(--surface);
    box-shadow: var(--shadow);
    padding: 1rem 2rem;
    display: none;
  }

  .nav-menu.active { display: flex; }
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 90vh;
  display: flex;
  align-items: center;
  max-width: none;
}

.particles {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

@keyframes particle-float {
  0%, 100% { transform: translate(0, 0); }
  25% { transform: translate(20px, -30px); }
  50% { transform: translate(-10px, 20px); }
  75% { transform: translate(30px, 10px); }
}

.hero-inner {
  max-width: 1080px;
  margin: 0 auto;
  padding: 0 2rem;
  position: relative;
}

.hero-title {
  font-size: 3rem;
  margin-bottom: 0.5rem;
}

.hero-subtitle {
  font-size: 1.5rem;
  color: var(--text-muted);
  min-height: 2.2rem;
}

.typed-text {
  color: var(--primary);
  font-weight: 600;
}

.typed-cursor {
  animation: blink 1s step-end infinite;
  font-weight: 400;
}

@keyframes blink {
  50% { opacity: 0; }
}

.hero-actions {
  margin-top: 2rem;
  display: flex;
  gap: 1rem;
}

.btn-primary, .btn-secondary, .btn-submit {
  padding: 0.7rem 1.6rem;
  border-radius: 8px;
  font-size: 1rem;
  cursor: pointer;
  transition: transform var(--transition-fast), background var(--transition-fast);
}

.btn-primary, .btn-submit {
  background: var(--primary);
  color: #fff;
  border: none;
}

.btn-secondary {
  background: none;
  color: var(--primary);
  border: 1px solid var(--primary);
}

.btn-primary:hover, .btn-secondary:hover, .btn-submit:hover:not(:disabled) {
  transform: translateY(-2px);
}

.btn-submit:disabled {
  opacity: 0.6;
  cursor: wait;
}

/* === About / Stats === */
.about-text {
  max-width: 640px;
  color: var(--text-muted);
}

.stats-row {
  display: flex;
  gap: 3rem;
  margin-top: 2.5rem;
  flex-wrap: wrap;
}

.stat {
  display: flex;
  flex-direction: column;
}

.stat-number {
  font-size: 2.5rem;
  font-weight: 700;
  color: var(--primary);
}

.stat-label {
  color: var(--text-muted);
  font-size: 0.9rem;
}

/* === Skills === */
.skill-tab-bar {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
}

.skill-tab {
  padding: 0.5rem 1.2rem;
  border: 1px solid var(--primary-soft);
  border-radius: 999px;
  background: none;
  color: var(--text-muted);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.skill-tab.active {
  background: var(--primary);
  border-color: var(--primary);
  color: #fff;
}

.skill-panel {
  display: none;
  flex-wrap: wrap;
  gap: 0.6rem;
}

.skill-panel.active {
  display: flex;
}

.skill-chip {
  padding: 0.4rem 1rem;
  background: var(--surface);
  border-radius: 8px;
  box-shadow: var(--shadow);
  font-size: 0.9rem;
}

/* === Projects === */
.filter-bar {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 2rem;
}

.filter-btn {
  padding: 0.4rem 1.1rem;
  border: 1px solid var(--primary-soft);
  border-radius: 999px;
  background: none;
  color: var(--text-muted);
  cursor: pointer;
  text-transform: capitalize;
  transition: all var(--transition-fast);
}

.filter-btn.active {
  background: var(--primary);
  border-color: var(--primary);
  color: #fff;
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 2rem;
}

.project-card {
  background: var(--surface);
  border-radius: 12px;
  overflow: hidden;
  box-shadow: var(--shadow);
  animation: fade-in 0.5s ease forwards;
}

.project-card.hidden {
  display: none;
}

@keyframes fade-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

/* Section content slides up on its first pass into view */
.reveal {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.revealed {
  opacity: 1;
  transform: translateY(0);
}

.project-body {
  padding: 1.25rem;
}

.project-title {
  margin-bottom: 0.4rem;
}

.project-description {
  color: var(--text-muted);
  font-size: 0.95rem;
  margin-bottom: 0.8rem;
}

.project-tags {
  display: flex;
  gap: 0.4rem;
  margin-bottom: 0.8rem;
}

.project-tag {
  font-size: 0.75rem;
  padding: 0.15rem 0.6rem;
  background: var(--primary-soft);
  color: var(--primary);
  border-radius: 999px;
}

.project-link {
  color: var(--primary);
  text-decoration: none;
  font-size: 0.9rem;
}

/* === Carousel === */
.project-carousel {
  outline: none;
}

.project-carousel:focus-visible {
  box-shadow: 0 0 0 2px var(--primary);
}

.carousel-container {
  position: relative;
  overflow: hidden;
  aspect-ratio: 16 / 10;
}

.carousel-slides {
  display: flex;
  height: 100%;
  transition: transform var(--transition-normal);
}

.carousel-slides img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  flex-shrink: 0;
}

.carousel-btn {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 32px;
  height: 32px;
  border: none;
  border-radius: 50%;
  background: rgba(0, 0, 0, 0.45);
  color: #fff;
  font-size: 1.2rem;
  cursor: pointer;
  opacity: 0;
  transition: opacity var(--transition-fast);
}

.carousel-container:hover .carousel-btn { opacity: 1; }
.carousel-btn.prev { left: 0.6rem; }
.carousel-btn.next { right: 0.6rem; }

.expand-btn {
  position: absolute;
  top: 0.6rem;
  right: 0.6rem;
  width: 32px;
  height: 32px;
  border: none;
  border-radius: 8px;
  background: rgba(0, 0, 0, 0.45);
  color: #fff;
  cursor: pointer;
  opacity: 0;
  transition: opacity var(--transition-fast);
}

.carousel-container:hover .expand-btn { opacity: 1; }

.carousel-dots {
  display: flex;
  justify-content: center;
  gap: 0.4rem;
  padding: 0.6rem 0;
}

.carousel-dot {
  width: 8px;
  height: 8px;
  border: none;
  border-radius: 50%;
  background: var(--primary-soft);
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.carousel-dot.active {
  background: var(--primary);
  transform: scale(1.3);
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 90;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.85);
  outline: none;
}

.lightbox-img {
  max-width: 86vw;
  max-height: 86vh;
  border-radius: 8px;
  cursor: default;
}

.lightbox-close {
  position: absolute;
  top: 1.2rem;
  right: 1.4rem;
  border: none;
  background: none;
  color: #fff;
  font-size: 1.6rem;
  cursor: pointer;
}

.lightbox-btn {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  border: none;
  background: rgba(255, 255, 255, 0.12);
  color: #fff;
  width: 44px;
  height: 44px;
  border-radius: 50%;
  font-size: 1.6rem;
  cursor: pointer;
}

.lightbox-btn.prev { left: 1.4rem; }
.lightbox-btn.next { right: 1.4rem; }

.lightbox-counter {
  position: absolute;
  bottom: 1.4rem;
  left: 50%;
  transform: translateX(-50%);
  color: #fff;
  font-size: 0.95rem;
  letter-spacing: 0.08em;
}

/* === Contact === */
.contact-blurb {
  color: var(--text-muted);
  margin-bottom: 1.5rem;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  max-width: 560px;
}

.form-field {
  padding: 0.8rem 1rem;
  border: 1px solid var(--primary-soft);
  border-radius: 8px;
  background: var(--surface);
  color: var(--text);
  font-size: 1rem;
  font-family: inherit;
}

.form-field:focus {
  outline: none;
  border-color: var(--primary);
}

.form-status {
  font-size: 0.95rem;
}

.form-status.success { color: var(--success); }
.form-status.error { color: var(--danger); }

/* === Back To Top === */
.back-to-top {
  position: fixed;
  bottom: 1.6rem;
  right: 1.6rem;
  z-index: 40;
  width: 44px;
  height: 44px;
  border: none;
  border-radius: 50%;
  background: var(--primary);
  color: #fff;
  font-size: 1.2rem;
  cursor: pointer;
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--transition-normal), visibility var(--transition-normal);
}

.back-to-top.visible {
  opacity: 1;
  visibility: visible;
}

/* === Footer === */
.footer {
  text-align: center;
  padding: 2rem;
  color: var(--text-muted);
  font-size: 0.9rem;
}
"#;
