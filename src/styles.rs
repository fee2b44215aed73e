pub const GLOBAL_CSS: &str = r#"
:root {
  --emerald: #10b981;
  --emerald-strong: #34d399;
  --gray-50: #f9fafb;
  --gray-100: #f3f4f6;
  --gray-400: #9ca3af;
  --gray-600: #4b5563;
  --gray-800: #1f2937;
  --gray-900: #111827;
  --gray-950: #030712;
  --radius-lg: 2rem;
  --font-body: "Inter", system-ui, -apple-system, sans-serif;
  --font-mono: "JetBrains Mono", ui-monospace, monospace;
  --transition: 300ms ease;
}

* { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body { margin: 0; font-family: var(--font-body); }
a { text-decoration: none; color: inherit; }
button { font-family: inherit; cursor: pointer; border: none; background: none; }

.page { min-height: 100vh; transition: background-color 500ms ease, color 500ms ease; }
.page-dark { background: var(--gray-950); color: var(--gray-100); }
.page-light { background: #ffffff; color: var(--gray-900); }

.text-gray-100 { color: var(--gray-100); }
.text-gray-400 { color: var(--gray-400); }
.text-gray-600 { color: var(--gray-600); }
.text-gray-900 { color: var(--gray-900); }
.card-bg-dark { background: rgba(17, 24, 39, 0.5); }
.card-bg-light { background: var(--gray-50); }
.toggle-bg-dark { background: var(--gray-800); }
.toggle-bg-light { background: var(--gray-100); }

.tone-emerald { color: var(--emerald); }
.tone-blue { color: #60a5fa; }
.tone-purple { color: #a855f7; }
.tone-orange { color: #f97316; }
.tone-yellow { color: #eab308; }
.accent { color: var(--emerald); }

.glass-effect {
  backdrop-filter: blur(12px);
  -webkit-backdrop-filter: blur(12px);
  border: 1px solid rgba(255, 255, 255, 0.06);
}

.container { width: 100%; max-width: 1200px; margin: 0 auto; padding: 0 1.25rem; }
.section { padding: 5rem 0; border-top: 1px solid var(--gray-900); }
.section-title {
  font-size: 1.75rem;
  font-weight: 900;
  font-style: italic;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  text-align: center;
  margin: 0 0 3rem;
}
.section-title--underlined {
  text-decoration: underline;
  text-decoration-color: var(--emerald);
  text-underline-offset: 8px;
}
.icon { display: inline-block; line-height: 1; font-style: normal; }

@media (min-width: 640px) {
  .container { padding: 0 2.5rem; }
}
"#;
