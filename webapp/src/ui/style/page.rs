pub const PAGE_STYLES: &str = r#"
/* Single page sections */

.site-root {
  min-height: 100vh;
  color: var(--text-primary);
  background: linear-gradient(180deg, var(--background-from), var(--background-via), var(--background-to));
  transition: background var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

.page-section {
  padding: var(--space-16) 0;
}

.page-section.band {
  background-color: var(--band);
  border-top: 1px solid var(--border);
  border-bottom: 1px solid var(--border);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
}

/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  backdrop-filter: blur(8px);
  background-color: var(--surface-translucent);
  border-bottom: 1px solid var(--border);
}

.header-inner {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.wordmark-row,
.header-actions {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.wordmark {
  font-size: 1.75rem;
  font-weight: 700;
  letter-spacing: -0.02em;
}

.wordmark-brand {
  background: linear-gradient(90deg, var(--brand-from), var(--brand-via), var(--brand-to));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.wordmark-suffix {
  margin-left: var(--space-2);
  color: var(--text-secondary);
}

.nav-links {
  display: none;
  gap: var(--space-1);
}

.nav-link {
  background: none;
  border: none;
  color: var(--text-primary);
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  cursor: pointer;
}

.nav-link:hover {
  background-color: var(--surface-muted);
}

.menu-button {
  display: inline-flex;
}

@media (min-width: 768px) {
  .nav-links { display: flex; }
  .menu-button { display: none; }
}

/* Mobile menu */
.menu-backdrop {
  position: fixed;
  inset: 0;
  z-index: 60;
  background-color: rgba(0, 0, 0, 0.4);
}

.menu-panel {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  z-index: 70;
  width: min(80vw, 320px);
  padding: var(--space-6);
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
}

.menu-panel .nav-link {
  text-align: left;
  font-size: 1.125rem;
}

.menu-close {
  align-self: flex-end;
}

/* Hero */
.hero {
  padding-top: var(--space-16);
}

.hero-grid {
  display: grid;
  gap: var(--space-8);
  align-items: center;
}

@media (min-width: 768px) {
  .hero-grid { grid-template-columns: 1fr 1fr; }
}

.hero-title {
  font-size: 3rem;
  font-weight: 800;
  line-height: 1.15;
}

.hero-lead {
  margin-top: var(--space-5);
  font-size: 1.125rem;
  line-height: 1.6;
  color: var(--text-secondary);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3);
  margin-top: var(--space-6);
}

.hero-image {
  aspect-ratio: 4 / 3;
  border-radius: var(--radius-xl);
  border: 1px solid var(--border);
  background-size: cover;
  background-position: center;
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-3);
  margin-top: var(--space-8);
}

@media (min-width: 768px) {
  .stats-grid { grid-template-columns: repeat(4, 1fr); }
}

.stat-card {
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  background-color: var(--surface-translucent);
  border: 1px solid var(--border);
}

.stat-value {
  font-size: 1.875rem;
  font-weight: 600;
}

.stat-label {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* About */
.about-grid {
  display: grid;
  gap: var(--space-8);
}

@media (min-width: 768px) {
  .about-grid { grid-template-columns: 7fr 5fr; }
}

.plain-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  color: var(--text-secondary);
}

.plain-list strong {
  font-weight: 500;
  color: var(--text-primary);
}

/* Roots */
.roots-intro {
  max-width: 48rem;
  line-height: 1.6;
  color: var(--text-secondary);
}

.timeline {
  display: flex;
  flex-direction: column;
  gap: var(--space-10);
  margin-top: 56px;
}

.timeline-item {
  display: grid;
  grid-template-columns: 1fr 4fr;
  gap: var(--space-4);
}

.timeline-year {
  position: sticky;
  top: 96px;
  font-size: 1.5rem;
  font-weight: 600;
  color: var(--timeline-year);
}

.timeline-body {
  padding: var(--space-5);
  border-radius: var(--radius-lg);
  background-color: var(--timeline-bg);
  border: 1px solid var(--timeline-border);
}

.faq-grid {
  margin-top: 56px;
}

.faq {
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  overflow: hidden;
}

.faq-question {
  width: 100%;
  display: flex;
  justify-content: space-between;
  align-items: center;
  text-align: left;
  padding: var(--space-4) var(--space-5);
  border: none;
  background-color: var(--surface);
  color: var(--text-primary);
  font-weight: 500;
  cursor: pointer;
}

.faq-question:hover {
  background-color: var(--surface-muted);
}

.faq-answer {
  padding: var(--space-4) var(--space-5);
  background-color: var(--surface-muted);
  border-top: 1px solid var(--border);
  color: var(--text-secondary);
  line-height: 1.6;
}

/* News, careers, contact */
.section-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-6);
}

.section-header .section-title {
  margin-bottom: 0;
}

.job-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  margin-top: var(--space-6);
}

.perks {
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background-color: var(--perks-bg);
  border: 1px solid var(--perks-border);
}

.perks ul {
  margin-top: var(--space-2);
  padding-left: var(--space-5);
  color: var(--text-secondary);
}

/* Footer */
.site-footer {
  padding: var(--space-10) 0;
  background-color: var(--surface-muted);
  border-top: 1px solid var(--border);
}

.footer-grid {
  display: grid;
  gap: var(--space-8);
}

@media (min-width: 768px) {
  .footer-grid { grid-template-columns: repeat(4, 1fr); }
}

.footer-link {
  background: none;
  border: none;
  padding: 0;
  color: var(--text-secondary);
  cursor: pointer;
}

.footer-link:hover {
  text-decoration: underline;
}

.footer-bottom {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: var(--space-3);
  margin-top: var(--space-8);
  padding-top: var(--space-6);
  border-top: 1px solid var(--border);
}

.dot {
  display: inline-block;
  width: 16px;
  height: 16px;
  margin-left: var(--space-3);
  border-radius: var(--radius-full);
  border: 1px solid var(--border-strong);
}

.dot-1 { background-color: var(--dot-1); }
.dot-2 { background-color: var(--surface); }
.dot-3 { background-color: var(--dot-3); }
"#;
