//! Global CSS styles for Blockfolio.
//!
//! Pixelated Minecraft GUI aesthetic. The dimension theme swaps the CSS
//! custom properties on `.theme-*` root classes; everything else reads the
//! variables.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --mc-gui-panel: #c6c6c6;
  --mc-gui-slot: #8b8b8b;
  --mc-gui-border-dark: #373737;
  --mc-panel-night: #2a2a3e;
  --mc-xp-green: #80ff20;
  --mc-xp-bg: #1c3a0e;
  --mc-grass: #5d9b37;
  --mc-gold: #ffaa00;
  --mc-aqua: #55ffff;
  --mc-enchant: #c4a7d7;

  --font-pixel: 'Press Start 2P', 'Courier New', monospace;
}

/* === Dimension themes === */
.theme-overworld {
  --sky-top: #1a1a4e;
  --sky-mid: #2a3a7e;
  --sky-low: #7ba4d8;
  --sky-bottom: #b3d4fc;
  --page-bg: #1a1a2e;
  --accent: #80ff20;
}

.theme-nether {
  --sky-top: #2b0a0a;
  --sky-mid: #531410;
  --sky-low: #6e1d12;
  --sky-bottom: #8c2e14;
  --page-bg: #1d0f10;
  --accent: #ff6a33;
}

.theme-end {
  --sky-top: #0b0b14;
  --sky-mid: #181327;
  --sky-low: #241b38;
  --sky-bottom: #2d2244;
  --page-bg: #120f1c;
  --accent: #c4a7d7;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
}

body {
  font-family: var(--font-pixel);
  background: #000;
  color: #fff;
  line-height: 1.6;
  image-rendering: pixelated;
}

button {
  font-family: inherit;
  border: none;
  background: none;
  cursor: pointer;
  color: inherit;
}

a {
  color: inherit;
  text-decoration: none;
}

.mc-root {
  min-height: 100vh;
}

.mc-page {
  position: relative;
  background: var(--page-bg);
  padding-bottom: 6rem;
}

/* === Pixel borders (outset/inset bevel) === */
.pixel-border {
  border: 3px solid;
  border-color: #fff #555 #555 #fff;
  box-shadow: 0 0 0 3px #000;
}

.pixel-border-dark {
  border: 2px solid;
  border-color: #373737 #fff #fff #373737;
}

/* === Sections === */
.mc-section {
  padding: 5rem 2rem;
  max-width: 64rem;
  margin: 0 auto;
  scroll-margin-top: 2rem;
}

.section-title {
  font-size: 1.4rem;
  text-align: center;
  color: #fff;
  text-shadow: 2px 2px 0 #000;
  margin-bottom: 1rem;
}

.section-hint {
  text-align: center;
  font-size: 0.6rem;
  color: rgba(255, 255, 255, 0.5);
  margin-bottom: 2.5rem;
}

.section-divider {
  max-width: 48rem;
  margin: 0 auto;
  height: 2px;
  background: linear-gradient(90deg, transparent, var(--mc-gui-border-dark), transparent);
}

/* === Skybox header === */
.skybox {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  overflow: hidden;
  background: linear-gradient(180deg,
    var(--sky-top) 0%, var(--sky-mid) 30%, var(--sky-low) 70%, var(--sky-bottom) 100%);
}

.skybox-sun {
  position: absolute;
  top: 4rem;
  right: 6rem;
  width: 5rem;
  height: 5rem;
  background: #ffe9a3;
  box-shadow: inset 0 0 0 8px #ffd75e;
}

.skybox-title {
  font-size: 2rem;
  text-shadow: 3px 3px 0 #000;
}

.skybox-subtitle {
  font-size: 0.7rem;
  color: rgba(255, 255, 255, 0.85);
  text-shadow: 1px 1px 0 #000;
}

.skybox-hint {
  position: absolute;
  bottom: 3rem;
  font-size: 0.6rem;
  color: rgba(255, 255, 255, 0.7);
  animation: bob 1.6s ease-in-out infinite;
}

.dimension-toggle {
  margin-top: 1.5rem;
  padding: 0.6rem 1rem;
  font-size: 0.6rem;
  color: #fff;
  background: rgba(0, 0, 0, 0.45);
  border: 2px solid var(--accent);
  text-shadow: 1px 1px 0 #000;
}

.dimension-toggle:hover {
  background: rgba(0, 0, 0, 0.7);
}

@keyframes bob {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-6px); }
}

/* === Panels === */
.gui-panel {
  background: var(--mc-gui-panel);
  padding: 1.25rem;
  color: #333;
}

.gui-panel-label {
  font-size: 0.55rem;
  color: #444;
  margin-bottom: 0.6rem;
}

.night-panel {
  background: var(--mc-panel-night);
  padding: 1rem;
}

/* === Character menu === */
.character-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2rem;
}

.avatar-frame {
  width: 10rem;
  height: 14rem;
  background: var(--mc-gui-slot);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 4rem;
  margin: 0 auto;
}

.avatar-caption {
  margin-top: 0.75rem;
  font-size: 0.6rem;
  color: #333;
  text-align: center;
}

.armor-slot {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  background: var(--mc-gui-slot);
  padding: 0.5rem;
  margin-bottom: 0.75rem;
}

.armor-slot-icon {
  width: 2.5rem;
  height: 2.5rem;
  background: #555;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.1rem;
}

.armor-slot-label {
  font-size: 0.55rem;
  color: #555;
}

.armor-slot-value {
  font-size: 0.6rem;
  font-weight: bold;
}

.stat-row {
  display: flex;
  justify-content: space-between;
  font-size: 0.55rem;
  color: #444;
  padding: 0.25rem 0;
}

.stats-block {
  margin-top: 1.25rem;
  padding-top: 1rem;
  border-top: 2px solid #aaa;
}

/* === Chest inventory === */
.chest-grid {
  display: grid;
  grid-template-columns: repeat(9, 1fr);
  gap: 2px;
  max-width: 42rem;
  margin: 0 auto;
}

.chest-slot {
  position: relative;
  aspect-ratio: 1;
  background: var(--mc-gui-slot);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.3rem;
}

.chest-slot:hover {
  filter: brightness(1.25);
}

.rarity-strip {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  height: 2px;
}

/* === Project modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 200;
  background: rgba(0, 0, 0, 0.7);
  display: flex;
  align-items: center;
  justify-content: center;
}

.modal-panel {
  background: var(--mc-panel-night);
  max-width: 28rem;
  width: 90%;
  padding: 1.5rem;
}

.modal-title {
  font-size: 0.8rem;
  margin-bottom: 0.25rem;
}

.modal-rarity {
  font-size: 0.55rem;
  font-style: italic;
  text-transform: capitalize;
  margin-bottom: 0.75rem;
}

.modal-body {
  font-size: 0.6rem;
  color: rgba(255, 255, 255, 0.75);
  margin-bottom: 0.75rem;
}

.modal-heading {
  font-size: 0.55rem;
  color: var(--mc-gold);
  margin: 0.75rem 0 0.35rem;
}

.tech-chip {
  display: inline-block;
  font-size: 0.5rem;
  background: #1a1a2e;
  padding: 0.25rem 0.5rem;
  margin: 0 0.3rem 0.3rem 0;
}

.loot-line {
  font-size: 0.55rem;
  color: var(--mc-xp-green);
}

.modal-close {
  margin-top: 1rem;
  font-size: 0.6rem;
  color: #fff;
  background: #555;
  padding: 0.5rem 1rem;
}

/* === Crafting table === */
.crafting-layout {
  display: flex;
  flex-wrap: wrap;
  gap: 2rem;
  align-items: flex-start;
  justify-content: center;
}

.palette-category {
  font-size: 0.55rem;
  color: var(--mc-enchant);
  margin: 0.75rem 0 0.4rem;
}

.palette-row {
  display: flex;
  flex-wrap: wrap;
  gap: 3px;
}

.ingredient-btn {
  position: relative;
  width: 3rem;
  height: 3rem;
  background: var(--mc-gui-slot);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  font-size: 1rem;
}

.ingredient-btn .ingredient-name {
  font-size: 0.35rem;
  color: #222;
  max-width: 100%;
  overflow: hidden;
  white-space: nowrap;
}

.ingredient-btn.selected {
  background: #3a5a2a;
  outline: 2px solid var(--mc-xp-green);
}

.ingredient-btn.on-grid {
  opacity: 0.4;
  pointer-events: none;
}

.lore-tooltip {
  display: none;
  position: absolute;
  bottom: calc(100% + 6px);
  left: 50%;
  transform: translateX(-50%);
  z-index: 50;
  min-width: 9rem;
  background: rgba(16, 0, 16, 0.94);
  border: 2px solid #2a0a5e;
  padding: 0.4rem;
  text-align: left;
}

.ingredient-btn:hover .lore-tooltip,
.craft-slot:hover .lore-tooltip {
  display: block;
}

.lore-name {
  font-size: 0.55rem;
  color: var(--mc-aqua);
  margin-bottom: 0.2rem;
}

.lore-line {
  font-size: 0.45rem;
  font-style: italic;
  color: var(--mc-enchant);
}

.craft-row {
  display: flex;
  align-items: center;
  gap: 1.25rem;
}

.craft-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 3px;
}

.craft-slot {
  position: relative;
  width: 3.6rem;
  height: 3.6rem;
  background: var(--mc-gui-slot);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
}

.craft-slot.placeable:hover {
  outline: 1px solid var(--mc-xp-green);
}

.craft-arrow {
  font-size: 1.5rem;
  color: #555;
  user-select: none;
}

.craft-output {
  width: 4.5rem;
  height: 4.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2rem;
  background: var(--mc-gui-slot);
}

.craft-output.matched {
  background: #3a5a2a;
  animation: result-flash 0.6s ease;
}

@keyframes result-flash {
  0% { box-shadow: 0 0 0 transparent; }
  50% { box-shadow: 0 0 20px var(--mc-gold); }
  100% { box-shadow: 0 0 0 transparent; }
}

.craft-clear {
  margin-top: 0.75rem;
  font-size: 0.5rem;
  color: #333;
  background: #aaa;
  padding: 0.35rem 0.75rem;
}

.craft-clear:hover {
  background: #ddd;
}

.result-card {
  margin-top: 1rem;
  background: var(--mc-panel-night);
  padding: 1rem;
  max-width: 18rem;
  text-align: center;
}

.result-name {
  font-size: 0.7rem;
  margin-bottom: 0.25rem;
}

.result-rarity {
  font-size: 0.5rem;
  font-style: italic;
  text-transform: capitalize;
  color: rgba(255, 255, 255, 0.5);
  margin-bottom: 0.5rem;
}

.result-desc {
  font-size: 0.5rem;
  color: rgba(255, 255, 255, 0.7);
}

.recipe-hints {
  margin-top: 1.5rem;
  text-align: center;
}

.recipe-hint-label {
  font-size: 0.5rem;
  color: rgba(255, 255, 255, 0.3);
  margin-bottom: 0.5rem;
}

.recipe-hint {
  display: inline-block;
  font-size: 0.45rem;
  color: rgba(255, 255, 255, 0.25);
  background: #1a1a2e;
  padding: 0.25rem 0.5rem;
  margin: 0.15rem;
}

/* === Timeline === */
.timeline {
  position: relative;
  max-width: 40rem;
  margin: 0 auto;
}

.timeline-rail {
  position: absolute;
  left: 1.5rem;
  top: 0;
  bottom: 0;
  width: 4px;
  background: var(--mc-grass);
}

.timeline-entry {
  position: relative;
  margin-bottom: 2.5rem;
  padding-left: 4.5rem;
}

.timeline-marker {
  position: absolute;
  left: 0.4rem;
  top: 0;
  width: 2.4rem;
  height: 2.4rem;
  background: var(--mc-grass);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1rem;
}

.timeline-card {
  background: var(--mc-panel-night);
  padding: 1rem;
}

.timeline-date {
  font-size: 0.5rem;
  color: var(--mc-xp-green);
  margin-bottom: 0.25rem;
}

.timeline-title {
  font-size: 0.7rem;
  color: var(--mc-gold);
  margin-bottom: 0.25rem;
}

.timeline-org {
  font-size: 0.55rem;
  color: var(--mc-aqua);
  margin-bottom: 0.5rem;
}

.timeline-desc {
  font-size: 0.5rem;
  color: rgba(255, 255, 255, 0.7);
}

/* === Advancement tree === */
.tree-grid {
  display: grid;
  grid-template-columns: repeat(7, 1fr);
  grid-template-rows: repeat(5, 6.5rem);
  position: relative;
  max-width: 52rem;
  margin: 0 auto;
}

.tree-node-cell {
  display: flex;
  align-items: center;
  justify-content: center;
  position: relative;
}

.tree-node {
  width: 4.2rem;
  height: 4.2rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.2rem;
}

.tree-node-icon {
  font-size: 1.3rem;
}

.tree-node-title {
  font-size: 0.38rem;
  text-align: center;
  line-height: 1.2;
  max-width: 100%;
  overflow: hidden;
}

.tree-popup {
  position: absolute;
  top: calc(100% - 0.5rem);
  left: 50%;
  transform: translateX(-50%);
  width: 13rem;
  z-index: 30;
  padding: 0.6rem;
  text-align: left;
}

.tree-popup-title {
  font-size: 0.6rem;
  font-weight: bold;
  margin-bottom: 0.3rem;
}

.tree-popup-desc {
  font-size: 0.5rem;
  color: rgba(255, 255, 255, 0.7);
}

/* === Achievement toast === */
.achievement-toast {
  position: fixed;
  top: 1.5rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 300;
  display: flex;
  align-items: center;
  gap: 1rem;
  background: var(--mc-panel-night);
  padding: 0.75rem 1.25rem;
  border: 3px solid;
  border-color: #fff #555 #555 #fff;
  box-shadow: 0 0 0 3px #000;
  animation: toast-drop 0.3s ease;
}

@keyframes toast-drop {
  from { transform: translate(-50%, -5rem); opacity: 0; }
  to { transform: translate(-50%, 0); opacity: 1; }
}

.toast-icon {
  width: 2.5rem;
  height: 2.5rem;
  background: var(--mc-gui-slot);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.2rem;
}

.toast-kicker {
  font-size: 0.5rem;
  color: var(--mc-gold);
}

.toast-title {
  font-size: 0.6rem;
  color: #fff;
  margin-top: 0.25rem;
}

/* === Chat log === */
.chat-log {
  position: fixed;
  bottom: 6.5rem;
  left: 1rem;
  z-index: 90;
  width: min(90vw, 22rem);
  min-height: 7.5rem;
  pointer-events: none;
  background: rgba(0, 0, 0, 0.4);
  padding: 0.6rem;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  transition: opacity 0.5s ease;
}

.chat-log.empty {
  opacity: 0;
}

.chat-line {
  font-size: 0.6rem;
  margin-bottom: 0.35rem;
  text-shadow: 1px 1px 0 #000;
}

.chat-text {
  color: #fff;
}

/* === Hotbar === */
.hotbar {
  position: fixed;
  bottom: 0.75rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 101;
  display: flex;
  gap: 2px;
  padding: 4px;
  background: #1a1a1a;
  border: 3px solid;
  border-color: #fff #555 #555 #fff;
  box-shadow: 0 0 0 3px #000;
}

.hotbar-slot-wrap {
  position: relative;
}

.hotbar-slot {
  width: 3.25rem;
  height: 3.25rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.3rem;
  background: #555;
  border: 2px solid #333;
}

.hotbar-slot.active {
  background: var(--mc-gui-slot);
  border-color: rgba(255, 255, 255, 0.8);
}

.hotbar-num {
  position: absolute;
  bottom: 0;
  right: 2px;
  font-size: 0.45rem;
  color: rgba(255, 255, 255, 0.4);
  pointer-events: none;
}

/* === XP bar === */
.level-up-overlay {
  position: fixed;
  inset: 0;
  z-index: 9999;
  display: flex;
  align-items: center;
  justify-content: center;
}

.level-up-burst {
  font-size: 2rem;
  color: var(--mc-xp-green);
  text-shadow: 0 2px 0 #000;
  animation: burst 0.5s ease;
}

@keyframes burst {
  from { transform: scale(0.5); opacity: 0; }
  to { transform: scale(1); opacity: 1; }
}

.xp-bar-wrap {
  position: fixed;
  bottom: 4.5rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 100;
  width: min(90vw, 45rem);
}

.xp-level {
  text-align: center;
  font-size: 0.6rem;
  color: var(--mc-xp-green);
  text-shadow: 0 1px 0 #000;
  margin-bottom: 0.25rem;
}

.xp-track {
  height: 10px;
  background: var(--mc-xp-bg);
  border: 2px solid;
  border-color: #373737 #fff #fff #373737;
  overflow: hidden;
}

.xp-fill {
  height: 100%;
  background: linear-gradient(180deg, #80ff20 0%, #4dd012 50%, #32a80e 100%);
  transition: width 0.4s ease;
}

/* === Footer === */
.dirt-footer {
  position: relative;
}

.grass-strip {
  height: 0.75rem;
  background: var(--mc-grass);
}

.dirt-body {
  background: #5a3e1e;
  padding: 3rem 1.5rem;
}

.sign-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1.5rem;
}

.wood-sign {
  display: block;
  text-align: center;
}

.sign-face {
  background: #b08050;
  padding: 0.75rem 1.5rem;
  font-size: 0.6rem;
  color: #fff;
  text-shadow: 1px 1px 0 #000;
  border: 3px solid;
  border-color: #fff #555 #555 #fff;
  box-shadow: 0 0 0 3px #000;
}

.sign-face:hover {
  background: #c49060;
}

.sign-post {
  width: 0.5rem;
  height: 1rem;
  background: #6b4f10;
  margin: 0 auto;
}

.footer-credit {
  text-align: center;
  margin-top: 2rem;
  font-size: 0.5rem;
  color: rgba(255, 255, 255, 0.5);
  text-shadow: 1px 1px 0 #000;
}
"#;
