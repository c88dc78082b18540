//! Global CSS styles for the Phone Card Catalog.
//!
//! Warm paper background, ink-blue accents, card-like tables.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --paper: #f7f4ee;
  --paper-dark: #ece6da;
  --card-bg: #ffffff;
  --border: #d9d2c3;

  /* Ink */
  --ink: #1f2a44;
  --ink-soft: rgba(31, 42, 68, 0.7);
  --ink-muted: rgba(31, 42, 68, 0.5);

  /* Accents */
  --accent: #1d5fa8;
  --accent-hover: #174c87;
  --gold: #c8a24a;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', Helvetica, sans-serif;

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

body {
  background: var(--paper);
  color: var(--ink);
  font-family: var(--font-sans);
  line-height: 1.5;
}

/* === Buttons === */
.btn-primary,
.btn-secondary {
  font-family: var(--font-sans);
  font-size: 0.875rem;
  padding: 0.4rem 0.9rem;
  border-radius: 6px;
  cursor: pointer;
  transition: background var(--transition-fast), border-color var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  border: 1px solid var(--accent);
  color: #fff;
}

.btn-primary:hover {
  background: var(--accent-hover);
}

.btn-secondary {
  background: transparent;
  border: 1px solid var(--border);
  color: var(--ink);
}

.btn-secondary:hover:not(:disabled) {
  border-color: var(--accent);
  color: var(--accent);
}

button:disabled {
  opacity: 0.4;
  cursor: not-allowed;
}

/* === Navigation Header === */
.nav-header {
  background: var(--ink);
  color: var(--paper);
  padding: 1.25rem 2rem;
}

.nav-header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: 1100px;
  margin: 0 auto;
}

.app-title {
  font-family: var(--font-serif);
  font-size: 2rem;
  color: var(--gold);
}

.tagline {
  font-size: 0.875rem;
  color: rgba(247, 244, 238, 0.7);
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  color: var(--paper);
  text-decoration: none;
  padding-bottom: 0.2rem;
  border-bottom: 2px solid transparent;
  transition: border-color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  border-bottom-color: var(--gold);
}

/* === Pages === */
.page {
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem;
  min-height: 70vh;
}

.page-intro {
  color: var(--ink-soft);
  margin-bottom: 1rem;
}

.section-header {
  font-family: var(--font-serif);
  font-size: 1.75rem;
  margin-bottom: 1.5rem;
}

.empty-state {
  color: var(--ink-muted);
  font-style: italic;
}

.category-summary {
  display: flex;
  gap: 0.75rem;
  margin-bottom: 2rem;
}

.category-chip {
  border: 1px solid var(--border);
  border-radius: 999px;
  padding: 0.2rem 0.8rem;
  font-size: 0.8rem;
  background: var(--card-bg);
}

/* === Gallery Sections === */
.gallery-section {
  margin-bottom: 2.5rem;
}

.gallery-section__header {
  display: flex;
  align-items: baseline;
  gap: 1rem;
  margin-bottom: 0.75rem;
}

.gallery-section__title {
  font-family: var(--font-serif);
  font-size: 1.5rem;
}

.gallery-section__count {
  color: var(--ink-muted);
  font-size: 0.875rem;
  flex: 1;
}

.gallery-table {
  width: 100%;
  border-collapse: collapse;
  background: var(--card-bg);
  border: 1px solid var(--border);
  border-radius: 8px;
  overflow: hidden;
}

.gallery-table th {
  text-align: left;
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--ink-muted);
  background: var(--paper-dark);
  padding: 0.5rem 0.75rem;
}

.gallery-table td {
  padding: 0.5rem 0.75rem;
  border-top: 1px solid var(--border);
  vertical-align: middle;
}

.gallery-table__row {
  cursor: pointer;
  transition: background var(--transition-fast);
}

.gallery-table__row:hover {
  background: var(--paper);
}

.gallery-table__index {
  width: 3rem;
  color: var(--ink-muted);
}

.gallery-table__thumb {
  width: 96px;
  height: 60px;
  object-fit: cover;
  border-radius: 4px;
}

.gallery-table__empty td {
  text-align: center;
  color: var(--ink-muted);
  font-style: italic;
  padding: 1.5rem;
}

/* === Card Images === */
.card-image__loading,
.card-image__placeholder {
  width: 96px;
  height: 60px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--paper-dark);
  color: var(--ink-muted);
  border-radius: 4px;
}

.loading-spinner {
  width: 16px;
  height: 16px;
  border: 2px solid var(--border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Modal Overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(10, 14, 24, 0.85);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  outline: none;
  animation: fade-in 300ms ease-out;
}

.carousel-modal {
  position: relative;
  background: var(--card-bg);
  border-radius: 10px;
  padding: 2rem 2.5rem 1.5rem;
  max-width: 90vw;
  max-height: 90vh;
  animation: modal-appear 300ms ease-out;
}

.modal-title {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  margin-bottom: 1rem;
}

.modal-close-btn {
  position: absolute;
  top: 0.75rem;
  right: 1rem;
  background: transparent;
  border: none;
  color: var(--ink-muted);
  font-size: 2rem;
  line-height: 1;
  cursor: pointer;
  transition: color var(--transition-fast), transform var(--transition-fast);
}

.modal-close-btn:hover {
  color: var(--ink);
  transform: rotate(90deg);
}

/* === Carousel === */
.carousel {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.carousel__frame {
  display: flex;
  align-items: center;
  justify-content: center;
  min-width: 320px;
  min-height: 200px;
}

.carousel__img {
  max-width: 70vw;
  max-height: 65vh;
  object-fit: contain;
  border-radius: 6px;
  box-shadow: 0 6px 24px rgba(0, 0, 0, 0.25);
}

.carousel__nav {
  background: var(--paper-dark);
  border: none;
  border-radius: 50%;
  width: 44px;
  height: 44px;
  font-size: 1.75rem;
  line-height: 1;
  color: var(--ink);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.carousel__nav:hover {
  background: var(--border);
}

.carousel__caption {
  display: flex;
  justify-content: space-between;
  margin-top: 1rem;
  color: var(--ink-soft);
  font-size: 0.875rem;
}

.fade-in {
  animation: fade-in 400ms ease-out;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes modal-appear {
  from {
    opacity: 0;
    transform: scale(0.95) translateY(-20px);
  }
  to {
    opacity: 1;
    transform: scale(1) translateY(0);
  }
}

/* === Marketplace === */
.listing-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.5rem;
}

.listing-card {
  background: var(--card-bg);
  border-radius: 16px;
  overflow: hidden;
  box-shadow: 0 4px 16px rgba(31, 42, 68, 0.12);
}

.listing-card__img {
  width: 100%;
  height: 160px;
  object-fit: cover;
}

.listing-card .card-image__placeholder,
.listing-card .card-image__loading {
  width: 100%;
  height: 160px;
  border-radius: 0;
}

.listing-card__content {
  padding: 1rem;
}

.listing-card__title {
  font-size: 1.125rem;
  font-weight: 700;
}

.listing-card__price {
  color: var(--ink-soft);
}

.listing-card__buy {
  margin-top: 0.5rem;
  width: 100%;
}

/* === Footer === */
.site-footer {
  text-align: center;
  padding: 2rem;
  color: var(--ink-muted);
  font-size: 0.8rem;
  border-top: 1px solid var(--border);
}

.site-footer__note {
  margin-top: 0.25rem;
}
"#;
