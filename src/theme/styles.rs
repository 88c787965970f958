//! Global CSS styles for the Hall of Zero Limits.
//!
//! Dark void backdrop, neon cyan accents, condensed display type.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #050507;
  --void-lighter: #0d0f14;
  --void-border: #1c1f26;

  /* NEON (Accents) */
  --neon: #00e5ff;
  --neon-glow: rgba(0, 229, 255, 0.35);
  --neon-soft: rgba(0, 229, 255, 0.12);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.45);

  /* Typography */
  --font-display: 'Bebas Neue', 'Oswald', 'Impact', sans-serif;
  --font-body: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--void-black);
  color: var(--text-primary);
  font-family: var(--font-body);
  overflow: hidden;
}

img { display: block; max-width: 100%; }

/* === Scene Root === */
.App {
  position: relative;
  width: 100vw;
  overflow-x: hidden;
}

.App.scene-intro { height: 100vh; overflow: hidden; }
.App.scene-gallery { height: auto; }

/* === Hero (Intro) === */
.hero {
  position: relative;
  width: 100vw;
  height: 100vh;
  overflow: hidden;
}

.hero-video {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  transform-origin: center center;
  z-index: 0;
}

.hero-overlay {
  position: relative;
  z-index: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 3rem;
  height: 100%;
  background: radial-gradient(ellipse at center, rgba(5, 5, 7, 0.2) 0%, rgba(5, 5, 7, 0.85) 100%);
}

.hero-heading {
  display: flex;
  flex-direction: column;
  align-items: center;
  line-height: 0.9;
  text-align: center;
}

.line-top {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.small-the, .small-off {
  font-family: var(--font-display);
  font-size: 1.5rem;
  letter-spacing: 0.3em;
  color: var(--text-secondary);
}

.big-text {
  font-family: var(--font-display);
  font-size: clamp(4rem, 12vw, 10rem);
  font-weight: 400;
  letter-spacing: 0.05em;
  text-shadow: 0 0 30px var(--neon-glow);
}

.bottom-text { color: var(--neon); }

.start-button {
  padding: 1rem 3.5rem;
  background: transparent;
  border: 2px solid var(--neon);
  color: var(--neon);
  font-family: var(--font-display);
  font-size: 1.5rem;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  cursor: pointer;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.start-button:hover {
  background: var(--neon-soft);
  box-shadow: 0 0 25px var(--neon-glow), inset 0 0 15px var(--neon-glow);
}

.start-button:disabled { opacity: 0.4; cursor: default; }

.hero-signature-container {
  position: absolute;
  bottom: 2rem;
  left: 0;
  right: 0;
  display: flex;
  justify-content: center;
}

.hero-signature {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.signature-logo { height: 28px; width: auto; }

.copyright-text {
  font-size: 0.8rem;
  letter-spacing: 0.15em;
  color: var(--text-muted);
}

/* === Gallery (pinned horizontal row) === */
.gallery-scroll { position: relative; }

.gallery-pin {
  position: sticky;
  top: 0;
  height: 100vh;
  overflow: hidden;
}

.gallery-track {
  display: flex;
  flex-wrap: nowrap;
  width: fit-content;
  height: 100%;
  will-change: transform;
}

.panel {
  width: 100vw;
  height: 100vh;
  flex-shrink: 0;
}

/* === Hall Section === */
.hall-section {
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(180deg, var(--void-black) 0%, var(--void-lighter) 100%);
}

.hall-content {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.hall-title {
  font-family: var(--font-display);
  font-size: clamp(3rem, 7vw, 6rem);
  font-weight: 400;
  letter-spacing: 0.1em;
}

.hall-subtitle {
  font-size: 0.9rem;
  letter-spacing: 0.5em;
  color: var(--neon);
  margin-bottom: 2.5rem;
}

.employee-cards-container {
  display: flex;
  gap: 2.5rem;
}

.employee-card {
  width: 240px;
  cursor: pointer;
  text-align: center;
}

.card-image-wrapper {
  position: relative;
  aspect-ratio: 3 / 4;
  overflow: hidden;
  margin-bottom: 1rem;
}

.card-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  filter: grayscale(0.6);
  transition: filter var(--transition-normal), transform var(--transition-normal);
}

.neon-border {
  position: absolute;
  inset: 0;
  border: 1px solid var(--void-border);
  transition: border-color var(--transition-normal), box-shadow var(--transition-normal);
}

.employee-card:hover .card-image { filter: grayscale(0); transform: scale(1.04); }
.employee-card:hover .neon-border {
  border-color: var(--neon);
  box-shadow: inset 0 0 20px var(--neon-glow);
}

.card-name {
  font-family: var(--font-display);
  font-size: 1.6rem;
  font-weight: 400;
  letter-spacing: 0.08em;
}

.card-title {
  font-size: 0.8rem;
  letter-spacing: 0.2em;
  color: var(--text-secondary);
  text-transform: uppercase;
}

/* === Employee Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(6px);
}

.modal-content {
  position: relative;
  width: min(560px, 90vw);
  max-height: 85vh;
  overflow-y: auto;
  padding: 2.5rem;
  background: var(--void-lighter);
  border: 1px solid var(--neon);
  box-shadow: 0 0 40px var(--neon-glow);
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  width: 2rem;
  height: 2rem;
  background: transparent;
  border: 1px solid var(--void-border);
  color: var(--text-secondary);
  font-size: 0.9rem;
  cursor: pointer;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.modal-close:hover { color: var(--neon); border-color: var(--neon); }

.modal-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
}

.modal-image {
  width: 140px;
  height: 140px;
  border-radius: 50%;
  object-fit: cover;
  border: 2px solid var(--neon);
}

.modal-header h2 {
  font-family: var(--font-display);
  font-size: 2.2rem;
  font-weight: 400;
  letter-spacing: 0.08em;
}

.modal-title {
  font-size: 0.8rem;
  letter-spacing: 0.25em;
  text-transform: uppercase;
  color: var(--neon);
}

.modal-body h3 {
  font-size: 0.9rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--text-muted);
  margin-bottom: 0.5rem;
}

.modal-body p { line-height: 1.7; color: var(--text-secondary); }

/* === Extra Section === */
.extra-section-wrapper {
  display: flex;
  align-items: center;
  justify-content: center;
  background: radial-gradient(circle at 70% 30%, rgba(0, 229, 255, 0.08) 0%, var(--void-black) 60%);
}

.extra-content {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  max-width: 1100px;
  padding: 0 2rem;
  text-align: center;
}

.extra-title {
  font-family: var(--font-display);
  font-size: clamp(2.5rem, 6vw, 5rem);
  font-weight: 400;
  letter-spacing: 0.1em;
  color: var(--neon);
}

.extra-text {
  max-width: 720px;
  line-height: 1.8;
  color: var(--text-secondary);
}

.core-values-container {
  display: flex;
  gap: 1.5rem;
}

.value-card {
  flex: 1;
  padding: 1.75rem;
  border: 1px solid var(--void-border);
  background: rgba(13, 15, 20, 0.7);
  text-align: left;
  transition: border-color var(--transition-normal);
}

.value-card:hover { border-color: var(--neon); }

.value-title {
  font-family: var(--font-display);
  font-size: 1.6rem;
  font-weight: 400;
  letter-spacing: 0.08em;
  margin-bottom: 0.75rem;
}

.value-text { font-size: 0.9rem; line-height: 1.6; color: var(--text-secondary); }

.extra-footer p {
  font-size: 0.85rem;
  letter-spacing: 0.2em;
  color: var(--text-muted);
}
"#;
