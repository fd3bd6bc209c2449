pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-3) var(--space-5);
  border-radius: var(--radius-lg);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--button);
  color: white;
}

.btn-primary:hover {
  background-color: var(--button-hover);
}

.btn-secondary {
  background-color: var(--surface);
  color: var(--text-primary);
  border: 1px solid var(--border);
}

.btn-secondary:hover {
  background-color: var(--surface-muted);
}

.btn-sm {
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
}

.btn-link {
  background: none;
  border: none;
  padding: 0;
  margin-top: var(--space-3);
  color: var(--link);
  font-weight: 500;
  cursor: pointer;
}

.btn-link:hover {
  color: var(--link-hover);
}

.btn-icon {
  background: none;
  border: none;
  padding: var(--space-2);
  border-radius: var(--radius-md);
  color: var(--toggle-icon);
  font-size: 1.25rem;
  line-height: 1;
  cursor: pointer;
}

.btn-icon:hover {
  background-color: var(--surface-muted);
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  padding: var(--space-6);
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.card:hover {
  box-shadow: var(--shadow-lg);
}

.card-lift:hover {
  transform: translateY(-4px);
}

.card-title {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.card-body {
  color: var(--text-secondary);
  line-height: 1.6;
}

/* Pills */
.pill {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  font-size: 0.8rem;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--pill-bg);
  color: var(--pill-text);
  border: 1px solid var(--pill-border);
}

.pill-row {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-top: var(--space-4);
}

/* Form Elements */
.form-group {
  margin-bottom: var(--space-4);
}

.form-row {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: var(--space-4);
}

.form-label {
  display: block;
  margin-bottom: var(--space-1);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.form-input,
.form-textarea {
  width: 100%;
  padding: 10px var(--space-4);
  border: 1px solid var(--border-strong);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
}

.form-input:focus,
.form-textarea:focus {
  box-shadow: 0 0 0 2px var(--button);
  outline: none;
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.grid-2,
.grid-3 {
  display: grid;
  gap: var(--space-6);
  grid-template-columns: 1fr;
}

@media (min-width: 768px) {
  .grid-2 { grid-template-columns: repeat(2, 1fr); }
  .grid-3 { grid-template-columns: repeat(3, 1fr); }
}

.muted {
  font-size: 0.875rem;
  color: var(--text-tertiary);
}
"#;
