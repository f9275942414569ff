//! Global CSS for the portfolio page.

pub const GLOBAL_STYLES: &str = r#"
/* === Custom Properties === */
:root {
  --ink: #14161a;
  --ink-soft: #23262c;
  --paper: #f7f5f1;
  --paper-dim: rgba(247, 245, 241, 0.72);
  --accent: #d4734b;
  --accent-deep: #b85633;
  --lake: #3e7f96;

  --text-primary: #f2efe9;
  --text-secondary: rgba(242, 239, 233, 0.72);
  --text-muted: rgba(242, 239, 233, 0.5);

  --font-display: 'Playfair Display', Georgia, serif;
  --font-body: 'Inter', 'Helvetica Neue', sans-serif;

  --shadow-soft: 0 8px 24px rgba(0, 0, 0, 0.35);
  --shadow-deep: 0 16px 48px rgba(0, 0, 0, 0.55);

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--ink);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* Suspend background scrolling while a modal is open */
.page.modal-open {
  height: 100vh;
  overflow: hidden;
}

/* === Header === */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 900;
  padding: 1.5rem 0;
  background: transparent;
  transition: background var(--transition-normal), padding var(--transition-normal),
              box-shadow var(--transition-normal);
}

.site-header.scrolled {
  padding: 0.75rem 0;
  background: rgba(20, 22, 26, 0.92);
  backdrop-filter: blur(8px);
  box-shadow: var(--shadow-soft);
}

.header-inner {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand {
  font-family: var(--font-display);
  font-size: 1.4rem;
  color: var(--paper);
  cursor: pointer;
  letter-spacing: 0.04em;
}

.nav-menu {
  display: flex;
  gap: 2rem;
}

.nav-link {
  color: var(--text-secondary);
  cursor: pointer;
  font-size: 0.95rem;
  letter-spacing: 0.06em;
  text-transform: uppercase;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--accent);
}

.nav-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
  padding: 0.5rem;
}

.nav-toggle-bar {
  width: 24px;
  height: 2px;
  background: var(--paper);
  transition: transform var(--transition-fast), opacity var(--transition-fast);
}

.nav-toggle.active .nav-toggle-bar:nth-child(1) {
  transform: translateY(7px) rotate(45deg);
}
.nav-toggle.active .nav-toggle-bar:nth-child(2) {
  opacity: 0;
}
.nav-toggle.active .nav-toggle-bar:nth-child(3) {
  transform: translateY(-7px) rotate(-45deg);
}

@media (max-width: 768px) {
  .nav-toggle { display: flex; }
  .nav-menu {
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    gap: 0;
    background: rgba(20, 22, 26, 0.97);
    max-height: 0;
    overflow: hidden;
    transition: max-height var(--transition-normal);
  }
  .nav-menu.active { max-height: 16rem; }
  .nav-menu .nav-link { padding: 1rem 1.5rem; }
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  overflow: hidden;
  background: radial-gradient(ellipse at 30% 20%, #1d2630 0%, var(--ink) 60%);
}

.hero-shapes .shape {
  position: absolute;
  border-radius: 50%;
  opacity: 0.18;
  animation: drift 14s ease-in-out infinite alternate;
}

.shape-1 { width: 280px; height: 280px; top: 12%; left: 8%; background: var(--lake); }
.shape-2 { width: 180px; height: 180px; bottom: 18%; right: 12%; background: var(--accent); animation-delay: 2s; }
.shape-3 { width: 120px; height: 120px; top: 55%; left: 70%; background: var(--paper); animation-delay: 4s; }

@keyframes drift {
  from { transform: translateY(0) rotate(0deg); }
  to { transform: translateY(-40px) rotate(12deg); }
}

.hero-content { position: relative; z-index: 1; padding: 0 1.5rem; }

.hero-kicker {
  color: var(--accent);
  text-transform: uppercase;
  letter-spacing: 0.2em;
  font-size: 0.85rem;
  margin-bottom: 1rem;
}

.hero-title {
  font-family: var(--font-display);
  font-size: clamp(2.8rem, 8vw, 5rem);
  font-weight: 500;
  color: var(--paper);
  margin-bottom: 1rem;
}

.hero-subtitle {
  color: var(--text-secondary);
  font-size: 1.15rem;
  min-height: 2em;
  margin-bottom: 2.5rem;
}

.typing-caret {
  display: inline-block;
  width: 2px;
  height: 1.1em;
  margin-left: 2px;
  vertical-align: text-bottom;
  background: var(--accent);
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

/* === Buttons === */
.btn-primary {
  display: inline-block;
  padding: 0.9rem 2.2rem;
  background: var(--accent);
  color: var(--ink);
  border: none;
  border-radius: 2rem;
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
  text-decoration: none;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn-primary:hover {
  background: var(--accent-deep);
  transform: translateY(-2px);
}

/* === Sections === */
main section {
  max-width: 1100px;
  margin: 0 auto;
  padding: 6rem 1.5rem 2rem;
}

.hero { max-width: none; padding: 0; }

.section-title {
  font-family: var(--font-display);
  font-size: 2.2rem;
  font-weight: 500;
  color: var(--paper);
  margin-bottom: 0.5rem;
}

.section-lede {
  color: var(--text-secondary);
  margin-bottom: 2.5rem;
}

/* === Fade-in on visibility === */
.fade-target {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.fade-target.visible,
.fade-in-up {
  opacity: 1;
  transform: translateY(0);
}

.fade-in-up {
  animation: rise 900ms ease both;
}

@keyframes rise {
  from { opacity: 0; transform: translateY(24px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Gallery === */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.gallery-card {
  position: relative;
  border-radius: 0.75rem;
  overflow: hidden;
  aspect-ratio: 4 / 3;
  background: var(--ink-soft);
  box-shadow: var(--shadow-soft);
}

.gallery-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-slow);
}

.gallery-card:hover .gallery-image {
  transform: scale(1.05);
}

.gallery-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: 1.25rem;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.85) 0%, transparent 55%);
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.gallery-card:hover .gallery-overlay {
  opacity: 1;
}

.gallery-caption h3 {
  font-family: var(--font-display);
  font-weight: 500;
  color: var(--paper);
}

.gallery-caption p {
  color: var(--text-secondary);
  font-size: 0.9rem;
  margin-bottom: 0.75rem;
}

.gallery-actions {
  display: flex;
  gap: 0.75rem;
}

.card-btn {
  padding: 0.45rem 1.2rem;
  border: 1px solid var(--paper-dim);
  border-radius: 1.5rem;
  background: rgba(0, 0, 0, 0.35);
  color: var(--paper);
  font-size: 0.85rem;
  cursor: pointer;
  transition: background var(--transition-fast), border-color var(--transition-fast);
}

.card-btn:hover {
  background: var(--accent);
  border-color: var(--accent);
  color: var(--ink);
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 1.75rem 3rem;
}

.skill-label {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.4rem;
  color: var(--text-secondary);
}

.skill-percent { color: var(--accent); }

.skill-track {
  height: 6px;
  border-radius: 3px;
  background: var(--ink-soft);
  overflow: hidden;
}

.skill-progress {
  height: 100%;
  border-radius: 3px;
  background: linear-gradient(90deg, var(--lake), var(--accent));
  transition: width 1.2s cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Contact / Footer === */
.contact-section { text-align: center; padding-bottom: 6rem; }
.contact-mail { margin-top: 1rem; }

.site-footer {
  border-top: 1px solid var(--ink-soft);
  padding: 2rem 1.5rem;
  text-align: center;
  color: var(--text-muted);
  font-size: 0.85rem;
}

/* === Back to top === */
.back-to-top {
  position: fixed;
  bottom: 2rem;
  right: 2rem;
  width: 48px;
  height: 48px;
  border: none;
  border-radius: 50%;
  background: var(--accent);
  color: var(--ink);
  font-size: 1.2rem;
  cursor: pointer;
  opacity: 0;
  visibility: hidden;
  transform: translateY(8px);
  transition: opacity var(--transition-normal), transform var(--transition-normal),
              visibility var(--transition-normal);
  box-shadow: var(--shadow-soft);
  z-index: 800;
}

.back-to-top.visible {
  opacity: 1;
  visibility: visible;
  transform: translateY(0);
}

.back-to-top:hover { transform: translateY(-3px); }

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.82);
  outline: none;
  animation: overlay-in 200ms ease;
}

@keyframes overlay-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.modal-close-btn {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  width: 2.25rem;
  height: 2.25rem;
  border: none;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.12);
  color: var(--paper);
  font-size: 1.3rem;
  line-height: 1;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.modal-close-btn:hover { background: var(--accent); color: var(--ink); }

/* === Lightbox === */
.lightbox-container {
  position: relative;
  display: flex;
  align-items: center;
  gap: 1rem;
  max-width: min(1000px, 92vw);
  max-height: 90vh;
  padding: 1rem;
}

.lightbox-figure { text-align: center; min-width: 0; }

.lightbox-image {
  max-width: 100%;
  max-height: 72vh;
  border-radius: 0.5rem;
  box-shadow: var(--shadow-deep);
}

.lightbox-title {
  font-family: var(--font-display);
  font-weight: 500;
  color: var(--paper);
  margin-top: 1rem;
}

.lightbox-description {
  color: var(--text-secondary);
  font-size: 0.95rem;
}

.lightbox-nav {
  flex: none;
  width: 2.75rem;
  height: 2.75rem;
  border: none;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.12);
  color: var(--paper);
  font-size: 1.6rem;
  line-height: 1;
  cursor: pointer;
  transition: background var(--transition-fast), opacity var(--transition-fast);
}

.lightbox-nav:hover:not(:disabled) { background: var(--accent); color: var(--ink); }

.lightbox-nav:disabled {
  opacity: 0.3;
  cursor: default;
}

/* === Share panel === */
.share-container {
  position: relative;
  width: min(420px, 92vw);
  padding: 2rem;
  border-radius: 0.75rem;
  background: var(--ink-soft);
  box-shadow: var(--shadow-deep);
}

.share-header { margin-bottom: 1.5rem; }

.share-title {
  font-family: var(--font-display);
  font-size: 1.3rem;
  font-weight: 500;
  color: var(--paper);
  padding-right: 2.5rem;
}

.share-options {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
}

.share-option {
  padding: 0.7rem 1rem;
  border: none;
  border-radius: 0.5rem;
  color: #fff;
  font-size: 0.9rem;
  cursor: pointer;
  transition: filter var(--transition-fast), transform var(--transition-fast);
}

.share-option:hover { filter: brightness(1.15); transform: translateY(-1px); }

.share-facebook { background: #1877f2; }
.share-twitter { background: #1da1f2; }
.share-linkedin { background: #0a66c2; }
.share-whatsapp { background: #25d366; }
.share-telegram { background: #229ed9; }

.copy-link-btn { width: 100%; border-radius: 0.5rem; }

/* === Toasts === */
.toast-stack {
  position: fixed;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  z-index: 1100;
  pointer-events: none;
}

.toast {
  padding: 0.75rem 1.5rem;
  border-radius: 2rem;
  background: var(--paper);
  color: var(--ink);
  font-size: 0.9rem;
  box-shadow: var(--shadow-soft);
  animation: toast-in 200ms ease;
  transition: opacity 300ms ease, transform 300ms ease;
}

.toast.fading {
  opacity: 0;
  transform: translateY(8px);
}

@keyframes toast-in {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
