//! Global CSS styles for the portfolio.
//!
//! Colors are custom properties switched by the `data-theme` attribute on
//! `#app`. Dark is the default palette.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root,
[data-theme="dark"] {
  --bg-primary: #0b0f19;
  --bg-secondary: #111827;
  --bg-card: #161f31;
  --border: rgba(148, 163, 184, 0.15);

  --text-primary: #f1f5f9;
  --text-secondary: #cbd5e1;
  --text-muted: #94a3b8;

  --accent: #6366f1;
  --accent-light: #818cf8;
  --accent-secondary: #06b6d4;
  --gradient: linear-gradient(135deg, var(--accent) 0%, var(--accent-secondary) 100%);

  --navbar-bg: rgba(11, 15, 25, 0.6);
  --navbar-scrolled-bg: rgba(11, 15, 25, 0.92);
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.35);
}

[data-theme="light"] {
  --bg-primary: #ffffff;
  --bg-secondary: #f8fafc;
  --bg-card: #ffffff;
  --border: rgba(15, 23, 42, 0.1);

  --text-primary: #0f172a;
  --text-secondary: #334155;
  --text-muted: #64748b;

  --navbar-bg: rgba(255, 255, 255, 0.6);
  --navbar-scrolled-bg: rgba(255, 255, 255, 0.95);
  --shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
}

:root {
  --font-sans: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --navbar-height: 72px;
  --radius: 16px;
  --radius-sm: 8px;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;
}

/* === Base === */
*,
*::before,
*::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html,
body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: var(--font-sans);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

#app {
  height: 100%;
  background: var(--bg-primary);
  color: var(--text-primary);
  transition: background var(--transition-normal), color var(--transition-normal);
}

/* The page scrolls inside #page, not the window */
.page {
  height: 100%;
  overflow-y: auto;
  overflow-x: hidden;
}

a {
  color: inherit;
  text-decoration: none;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.85rem 1.75rem;
  border-radius: 999px;
  font-size: 0.95rem;
  font-weight: 600;
  cursor: pointer;
  border: 2px solid transparent;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast),
    background var(--transition-fast);
}

.btn:hover {
  transform: translateY(-2px);
}

.btn:disabled {
  cursor: default;
  opacity: 0.8;
  transform: none;
}

.btn-primary {
  background: var(--gradient);
  color: #ffffff;
  box-shadow: 0 8px 20px rgba(99, 102, 241, 0.3);
}

.btn-outline {
  border-color: var(--accent);
  color: var(--accent-light);
  background: transparent;
}

.btn-outline:hover {
  background: var(--accent);
  color: #ffffff;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  height: var(--navbar-height);
  background: var(--navbar-bg);
  backdrop-filter: blur(12px);
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.navbar.scrolled {
  background: var(--navbar-scrolled-bg);
  box-shadow: var(--shadow);
}

.nav-container {
  max-width: 1200px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  display: flex;
  align-items: baseline;
  gap: 0.4rem;
}

.logo-text {
  font-size: 1.5rem;
  font-weight: 800;
  background: var(--gradient);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.logo-badge {
  font-family: var(--font-mono);
  font-size: 0.7rem;
  color: var(--text-muted);
}

.nav-menu {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--accent-light);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.theme-toggle {
  width: 40px;
  height: 40px;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--bg-card);
  color: var(--text-primary);
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.theme-toggle:hover {
  transform: rotate(20deg);
}

.hamburger {
  display: none;
  flex-direction: column;
  gap: 5px;
  cursor: pointer;
}

.hamburger span {
  width: 24px;
  height: 2px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.hamburger.active span:nth-child(1) {
  transform: translateY(7px) rotate(45deg);
}

.hamburger.active span:nth-child(2) {
  opacity: 0;
}

.hamburger.active span:nth-child(3) {
  transform: translateY(-7px) rotate(-45deg);
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding: calc(var(--navbar-height) + 2rem) 1.5rem 4rem;
  overflow: hidden;
}

.hero-background {
  position: absolute;
  inset: 0;
  background: radial-gradient(circle at 20% 20%, rgba(99, 102, 241, 0.18), transparent 50%),
    radial-gradient(circle at 80% 70%, rgba(6, 182, 212, 0.14), transparent 50%);
  pointer-events: none;
}

.hero-content {
  position: relative;
  max-width: 1200px;
  width: 100%;
  margin: 0 auto;
  display: grid;
  grid-template-columns: 1.3fr 1fr;
  align-items: center;
  gap: 3rem;
}

.hero-badge {
  display: inline-block;
  padding: 0.35rem 1rem;
  margin-bottom: 1.5rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  font-family: var(--font-mono);
  font-size: 0.8rem;
  color: var(--accent-light);
}

.hero-title {
  display: flex;
  flex-direction: column;
  font-size: 3.5rem;
  line-height: 1.1;
  margin-bottom: 1rem;
}

.hero-title .greeting {
  font-size: 1.5rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.hero-title .name {
  font-weight: 800;
  background: var(--gradient);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.hero-subtitle {
  font-size: 1.4rem;
  font-weight: 600;
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.hero-description {
  max-width: 560px;
  color: var(--text-muted);
  margin-bottom: 2rem;
}

.hero-buttons {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-bottom: 2rem;
}

.social-links {
  display: flex;
  gap: 0.75rem;
}

.social-link,
.footer-social-link {
  width: 42px;
  height: 42px;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  border: 1px solid var(--border);
  color: var(--text-secondary);
  transition: color var(--transition-fast), border-color var(--transition-fast),
    transform var(--transition-fast);
}

.social-link:hover,
.footer-social-link:hover {
  color: var(--accent-light);
  border-color: var(--accent);
  transform: translateY(-3px);
}

.hero-visual {
  position: relative;
  display: flex;
  justify-content: center;
}

.hero-avatar {
  position: relative;
  width: 280px;
  height: 280px;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 5rem;
  color: #ffffff;
}

.avatar-gradient {
  position: absolute;
  inset: 0;
  border-radius: 50%;
  background: var(--gradient);
  opacity: 0.9;
  z-index: -1;
}

.floating-elements {
  position: absolute;
  inset: 0;
}

.float-icon {
  position: absolute;
  font-size: 2rem;
  color: var(--accent-light);
  animation: float 4s ease-in-out infinite;
  animation-delay: var(--delay);
}

.float-icon:nth-child(1) { top: 0; left: 10%; }
.float-icon:nth-child(2) { top: 45%; right: 0; }
.float-icon:nth-child(3) { bottom: 0; left: 20%; }

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-14px); }
}

.scroll-indicator {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  font-size: 1.25rem;
  color: var(--text-muted);
  animation: float 2s ease-in-out infinite;
}

/* === Sections === */
.section {
  padding: 6rem 0;
  opacity: 0;
  transform: translateY(40px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.section.animate {
  opacity: 1;
  transform: translateY(0);
}

.section:nth-of-type(odd) {
  background: var(--bg-secondary);
}

.section-header {
  text-align: center;
  margin-bottom: 3.5rem;
}

.section-badge {
  display: inline-block;
  padding: 0.3rem 0.9rem;
  margin-bottom: 0.75rem;
  border-radius: 999px;
  background: rgba(99, 102, 241, 0.12);
  color: var(--accent-light);
  font-family: var(--font-mono);
  font-size: 0.8rem;
}

.section-title {
  font-size: 2.5rem;
  font-weight: 800;
}

/* === About === */
.about-text p {
  max-width: 800px;
  margin: 0 auto 1.25rem;
  color: var(--text-secondary);
  text-align: center;
}

.about-stats {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 1.5rem;
  margin-top: 3rem;
}

.stat-item {
  padding: 1.75rem 1rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-card);
  text-align: center;
}

.stat-number {
  font-size: 2.5rem;
  font-weight: 800;
  background: var(--gradient);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.stat-label {
  color: var(--text-muted);
  font-size: 0.9rem;
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
}

.skill-category {
  padding: 2rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-card);
}

.skill-category-title {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  margin-bottom: 1.5rem;
  font-size: 1.2rem;
}

.skill-category-title i {
  color: var(--accent-light);
}

.skill-item {
  margin-bottom: 1.1rem;
}

.skill-header {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.4rem;
  font-size: 0.9rem;
}

.skill-percentage {
  font-family: var(--font-mono);
  color: var(--text-muted);
}

.skill-bar {
  height: 8px;
  border-radius: 999px;
  background: var(--border);
  overflow: hidden;
}

.skill-progress {
  height: 100%;
  border-radius: 999px;
  background: var(--gradient);
  transition: width 1.5s ease;
}

/* === Projects === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(330px, 1fr));
  gap: 2rem;
}

.project-card {
  display: flex;
  flex-direction: column;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-card);
  overflow: hidden;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-6px);
  box-shadow: var(--shadow);
}

.project-header {
  position: relative;
  height: 160px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--gradient);
}

.project-icon {
  font-size: 4rem;
}

.project-badge {
  position: absolute;
  top: 1rem;
  right: 1rem;
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  background: rgba(0, 0, 0, 0.35);
  color: #ffffff;
  font-size: 0.75rem;
  font-weight: 600;
}

.project-content {
  flex: 1;
  display: flex;
  flex-direction: column;
  padding: 1.5rem;
}

.project-title {
  font-size: 1.25rem;
  margin-bottom: 0.6rem;
}

.project-description {
  color: var(--text-muted);
  font-size: 0.92rem;
  margin-bottom: 1rem;
}

.project-technologies {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1.25rem;
}

.tech-tag {
  padding: 0.2rem 0.65rem;
  border-radius: var(--radius-sm);
  background: rgba(99, 102, 241, 0.12);
  color: var(--accent-light);
  font-family: var(--font-mono);
  font-size: 0.75rem;
}

.project-links {
  margin-top: auto;
  display: flex;
  gap: 1.25rem;
}

.project-link {
  color: var(--text-secondary);
  font-weight: 600;
  font-size: 0.9rem;
  transition: color var(--transition-fast);
}

.project-link:hover {
  color: var(--accent-light);
}

/* === Contact === */
.contact-content {
  display: grid;
  grid-template-columns: 1fr 1.4fr;
  gap: 3rem;
}

.contact-description {
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.contact-item {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.contact-icon {
  width: 48px;
  height: 48px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-sm);
  background: var(--gradient);
  color: #ffffff;
}

.contact-item h4 {
  font-size: 0.85rem;
  color: var(--text-muted);
}

.contact-item a:hover {
  color: var(--accent-light);
}

.contact-form {
  padding: 2rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-card);
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
  margin-bottom: 1.25rem;
}

.form-group label {
  font-size: 0.85rem;
  font-weight: 600;
  color: var(--text-secondary);
}

.form-group input,
.form-group textarea {
  padding: 0.8rem 1rem;
  border-radius: var(--radius-sm);
  border: 1px solid var(--border);
  background: var(--bg-primary);
  color: var(--text-primary);
  font-family: inherit;
  font-size: 0.95rem;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form-group input:focus,
.form-group textarea:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px rgba(99, 102, 241, 0.2);
}

.form-group textarea {
  resize: vertical;
}

/* === Footer === */
.footer {
  padding: 3rem 0 2rem;
  border-top: 1px solid var(--border);
}

.footer-content {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  color: var(--text-muted);
}

.footer-social {
  display: flex;
  gap: 0.75rem;
}

.footer-bottom {
  margin-top: 2rem;
  text-align: center;
  font-size: 0.85rem;
  color: var(--text-muted);
}

.footer-bottom .fa-heart {
  color: #ef4444;
}

/* === Fallback === */
.error-message {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  padding: 2rem;
  text-align: center;
}

.error-message h1 {
  font-size: 2.5rem;
}

.error-detail {
  font-family: var(--font-mono);
  font-size: 0.85rem;
  color: var(--text-muted);
}

/* === Mobile === */
@media (max-width: 768px) {
  .nav-menu {
    position: fixed;
    top: var(--navbar-height);
    left: -100%;
    width: 100%;
    flex-direction: column;
    align-items: center;
    gap: 1.5rem;
    padding: 2rem 0;
    background: var(--navbar-scrolled-bg);
    box-shadow: var(--shadow);
    transition: left var(--transition-normal);
  }

  .nav-menu.active {
    left: 0;
  }

  .hamburger {
    display: flex;
  }

  .hero-content,
  .contact-content,
  .form-row {
    grid-template-columns: 1fr;
  }

  .hero-visual {
    display: none;
  }

  .hero-title {
    font-size: 2.5rem;
  }

  .about-stats {
    grid-template-columns: repeat(2, 1fr);
  }

  .section-title {
    font-size: 2rem;
  }

  .footer-content {
    flex-direction: column;
  }
}
"#;
