/// Celebration effect for the Q&A stage. Uses the confetti library when the
/// page provides one and falls back to a brightness pulse when it does not,
/// so the button always does something visible.
pub(super) fn confetti_script() -> &'static str {
    r"(function() {
        if (typeof window.confetti === 'function') {
            const end = Date.now() + 800;
            (function frame() {
                window.confetti({
                    particleCount: 60,
                    spread: 60,
                    startVelocity: 38,
                    ticks: 120,
                    origin: { x: Math.random(), y: Math.random() * 0.3 },
                });
                if (Date.now() < end) requestAnimationFrame(frame);
            })();
            return;
        }
        document.body.animate(
            [
                { filter: 'brightness(1)' },
                { filter: 'brightness(1.4)' },
                { filter: 'brightness(1)' },
            ],
            { duration: 500 },
        );
    })();"
}
