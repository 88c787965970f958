//! JavaScript side of the animation bridge.
//!
//! Runs once per window via `document::eval`. Tweens use the Web Animations
//! API over registered custom properties (`--hoz-x`, `--hoz-y`,
//! `--hoz-scale`) so an interrupted tween can resume from the live value.
//! Scroll windows are polled on animation frames, which also catches
//! elements moved by the horizontal track rather than by scrolling.

pub const RUNTIME_JS: &str = r#"
const PROPS = {
  opacity: { css: 'opacity', unit: '', initial: 1 },
  scale: { css: '--hoz-scale', unit: '', initial: 1 },
  x: { css: '--hoz-x', unit: 'px', initial: 0 },
  y: { css: '--hoz-y', unit: 'px', initial: 0 },
};

if (window.CSS && CSS.registerProperty && !window.__hozRegistered) {
  window.__hozRegistered = true;
  for (const [name, syntax, initial] of [
    ['--hoz-x', '<length>', '0px'],
    ['--hoz-y', '<length>', '0px'],
    ['--hoz-scale', '<number>', '1'],
  ]) {
    try { CSS.registerProperty({ name, syntax, inherits: false, initialValue: initial }); } catch (_) {}
  }
}

const TRANSFORM = 'translate(var(--hoz-x, 0px), var(--hoz-y, 0px)) scale(var(--hoz-scale, 1))';

const elements = (target) => Array.from(document.querySelectorAll(target));

const prepare = (el) => {
  if (!el.__hoz) {
    el.__hoz = {};
    el.style.transform = TRANSFORM;
  }
  return el.__hoz;
};

const current = (el, prop) => {
  const raw = getComputedStyle(el).getPropertyValue(PROPS[prop].css);
  const value = parseFloat(raw);
  return Number.isFinite(value) ? value : PROPS[prop].initial;
};

const write = (el, prop, value) => {
  el.style.setProperty(PROPS[prop].css, `${value}${PROPS[prop].unit}`);
};

// Freeze a running animation of `prop` at its live value and drop it.
const interrupt = (el, prop) => {
  const running = prepare(el)[prop];
  if (running) {
    const value = current(el, prop);
    running.cancel();
    write(el, prop, value);
    delete el.__hoz[prop];
  }
};

const set = (target, props) => {
  for (const el of elements(target)) {
    for (const [prop, value] of Object.entries(props)) {
      interrupt(el, prop);
      write(el, prop, value);
    }
  }
};

const tween = (id, spec, easing) => {
  const finished = [];
  elements(spec.target).forEach((el, index) => {
    const state = prepare(el);
    for (const [prop, end] of Object.entries(spec.to)) {
      interrupt(el, prop);
      const start = spec.from && prop in spec.from ? spec.from[prop] : current(el, prop);
      write(el, prop, start);
      const css = PROPS[prop].css;
      const unit = PROPS[prop].unit;
      const animation = el.animate(
        [{ [css]: `${start}${unit}` }, { [css]: `${end}${unit}` }],
        {
          duration: Math.max(0, spec.duration) * 1000,
          delay: Math.max(0, spec.delay + index * spec.stagger) * 1000,
          easing: easing || 'linear',
          fill: 'both',
        },
      );
      state[prop] = animation;
      finished.push(animation.finished.then(() => {
        if (state[prop] === animation) {
          write(el, prop, end);
          animation.cancel();
          delete state[prop];
        }
      }));
    }
  });
  // Interrupted tweens never report completion.
  Promise.all(finished).then(
    () => dioxus.send({ type: 'tweenFinished', id }),
    () => {},
  );
};

const triggers = new Map();
let polling = false;

const absoluteTop = (el) => el.getBoundingClientRect().top + window.scrollY;

const bind = (id, spec) => {
  const el = document.querySelector(spec.target);
  if (!el) return;
  const trigger = { id, spec, el, progress: null, entered: false };
  if (spec.window.kind === 'pinned' && spec.pin && el.parentElement) {
    trigger.spacer = el.parentElement;
    trigger.spacer.style.height = `${el.offsetHeight + spec.window.length}px`;
  }
  triggers.set(id, trigger);
  poll();
};

// Resize a live window without dropping the spacer, so scrollY survives.
const update = (id, next) => {
  const trigger = triggers.get(id);
  if (!trigger) return;
  trigger.spec.window = next;
  if (trigger.spacer && next.kind === 'pinned') {
    trigger.spacer.style.height = `${trigger.el.offsetHeight + next.length}px`;
  }
  trigger.progress = null;
};

const release = (id) => {
  const trigger = triggers.get(id);
  if (!trigger) return;
  if (trigger.spacer) trigger.spacer.style.height = '';
  triggers.delete(id);
};

const check = (trigger) => {
  const { id, spec, el } = trigger;
  if (spec.window.kind === 'pinned') {
    const origin = trigger.spacer ? absoluteTop(trigger.spacer) : absoluteTop(el);
    const length = spec.window.length;
    const raw = length > 0 ? (window.scrollY - origin) / length : 1;
    const progress = Math.min(1, Math.max(0, raw));
    if (trigger.progress === null || Math.abs(progress - trigger.progress) > 0.0005) {
      trigger.progress = progress;
      dioxus.send({ type: 'triggerProgress', id, progress });
    }
  } else {
    const left = el.getBoundingClientRect().left;
    const inside = left <= spec.window.start * window.innerWidth;
    if (inside && !trigger.entered) {
      trigger.entered = true;
      dioxus.send({ type: 'triggerEnter', id });
    } else if (!inside && !spec.once) {
      trigger.entered = false;
    }
  }
};

const poll = () => {
  if (polling) return;
  polling = true;
  const frame = () => {
    if (triggers.size === 0) {
      polling = false;
      return;
    }
    for (const trigger of Array.from(triggers.values())) check(trigger);
    requestAnimationFrame(frame);
  };
  requestAnimationFrame(frame);
};

const observed = new Map();

const measure = (container, track) => {
  const row = document.querySelector(track);
  if (!document.querySelector(container) || !row) return;
  dioxus.send({
    type: 'measured',
    container,
    geometry: {
      panelWidths: Array.from(row.children).map((child) => child.offsetWidth),
      viewportWidth: window.innerWidth,
    },
  });
};

const observe = (container, track) => {
  const previous = observed.get(container);
  if (previous) previous.disconnect();
  let queued = false;
  const report = () => {
    if (queued) return;
    queued = true;
    requestAnimationFrame(() => {
      queued = false;
      measure(container, track);
    });
  };
  const row = document.querySelector(track);
  const observer = new ResizeObserver(report);
  if (row) {
    observer.observe(row);
    for (const child of row.children) observer.observe(child);
  }
  window.addEventListener('resize', report);
  observed.set(container, {
    disconnect: () => {
      observer.disconnect();
      window.removeEventListener('resize', report);
    },
  });
  measure(container, track);
};

const lockScroll = (locked) => {
  const overflow = locked ? 'hidden' : 'auto';
  document.body.style.overflow = overflow;
  document.documentElement.style.overflow = overflow;
};

const apply = (command) => {
  switch (command.op) {
    case 'set': set(command.target, command.props); break;
    case 'tween': tween(command.id, command.spec, command.easing); break;
    case 'bindTrigger': bind(command.id, command.spec); break;
    case 'updateTrigger': update(command.id, command.window); break;
    case 'releaseTrigger': release(command.id); break;
    case 'releaseAllTriggers':
      for (const id of Array.from(triggers.keys())) release(id);
      for (const entry of observed.values()) entry.disconnect();
      observed.clear();
      break;
    case 'scrollLock': lockScroll(command.locked); break;
    case 'resetScroll': window.scrollTo(0, 0); break;
    default: console.warn('hallofzero: unknown command', command);
  }
};

while (true) {
  const message = await dioxus.recv();
  try {
    if (message.kind === 'commands') {
      for (const command of message.commands) apply(command);
    } else if (message.kind === 'observe') {
      observe(message.container, message.track);
    }
  } catch (error) {
    console.error('hallofzero: runtime error', error);
  }
}
"#;
