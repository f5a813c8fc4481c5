//! Site stylesheet, embedded as a constant and injected by the root shell.
//!
//! One rule per line. Dark theme: deep black background, neon green brand
//! accent, orange call-to-action gradient.

/// Complete CSS for the site, including the entrance/pulse animations the
/// sections reference via `fade-in-*` classes and inline `animation-delay`.
pub const SITE_CSS: &str = r#"
:root{--deep-black:#0d0d0d;--panel:#13131b;--neon-green:#00ff88;--neon-green-dim:#007744;--accent-orange:#e45619;--accent-orange-light:#dd6c1c;--loss-red:#ff4d4d;--text-primary:#ffffff;--text-muted:#9ca3af;--border:#374151;}
*{box-sizing:border-box;}
body{margin:0;background:var(--deep-black);color:var(--text-primary);font-family:'Inter',system-ui,-apple-system,Segoe UI,Helvetica,Arial,sans-serif;line-height:1.5;}
.app-shell{min-height:100vh;position:relative;overflow-x:hidden;}
.container{max-width:1180px;margin:0 auto;padding:0 24px;}
a{color:inherit;text-decoration:none;}
button{font:inherit;cursor:pointer;border:none;background:none;color:inherit;}

.nav{position:fixed;top:0;width:100%;z-index:50;background:rgba(13,13,13,.85);backdrop-filter:blur(12px);border-bottom:1px solid rgba(55,65,81,.4);}
.nav-inner{max-width:1180px;margin:0 auto;display:flex;align-items:center;justify-content:space-between;height:64px;padding:0 24px;}
.nav-brand{display:flex;align-items:center;gap:8px;}
.nav-logo{width:32px;height:32px;}
.nav-title{font-size:24px;font-weight:700;color:var(--neon-green);text-shadow:0 0 6px var(--neon-green);}
.nav-links{display:flex;align-items:center;gap:24px;}
.nav-link{color:var(--text-muted);transition:color .3s;}
.nav-link:hover{color:var(--text-primary);}
.nav-cta{background:linear-gradient(90deg,var(--accent-orange),var(--accent-orange-light));color:#fff;padding:8px 24px;border-radius:16px;font-weight:600;transition:transform .3s;}
.nav-cta:hover{transform:scale(1.05);}
.nav-cta-wide{width:100%;}
.nav-menu-toggle{display:none;font-size:22px;color:var(--text-muted);}
.nav-mobile{display:none;border-top:1px solid rgba(55,65,81,.4);padding:12px 24px;background:rgba(13,13,13,.95);}
.nav-mobile-link{display:block;padding:10px 0;color:var(--text-muted);}
@media(max-width:768px){.nav-links{display:none;}.nav-menu-toggle{display:block;}.nav-mobile{display:block;}}

.hero{padding:160px 0 96px;position:relative;overflow:hidden;}
.hero-grid{display:grid;grid-template-columns:1fr 1fr;gap:48px;align-items:center;}
.hero-title{font-size:56px;font-weight:700;line-height:1.1;margin:0 0 16px;}
.hero-title-accent{color:var(--neon-green);text-shadow:0 0 6px var(--neon-green);}
.hero-description{font-size:19px;color:var(--text-muted);text-align:justify;margin:0 0 32px;}
.hero-actions{display:flex;gap:16px;flex-wrap:wrap;}
.btn{display:inline-block;padding:12px 32px;border-radius:12px;font-size:17px;font-weight:700;color:#fff;transition:transform .3s,box-shadow .3s;}
.btn:hover{transform:scale(1.05);box-shadow:0 12px 30px rgba(0,0,0,.5);}
.btn-chat{background:linear-gradient(90deg,#d8480a,#f37c28);}
.btn-trading{background:linear-gradient(90deg,#44c744,#026f31);}
.hero-visual{position:relative;height:450px;display:none;}
@media(min-width:1024px){.hero-visual{display:block;}}
@media(max-width:1023px){.hero-grid{grid-template-columns:1fr;}}

.analysis-panel{position:absolute;top:45%;left:55%;width:380px;transform:translate(-50%,-50%);background:rgba(19,19,27,.5);border:1px solid var(--border);border-radius:16px;padding:24px;backdrop-filter:blur(12px);box-shadow:0 0 80px -10px rgba(0,255,136,.25);}
.panel-heading{text-align:center;margin-bottom:16px;}
.panel-title{font-size:14px;font-weight:600;margin:0;}
.panel-subtitle{font-size:12px;color:#4ade80;margin:4px 0 0;}
.chart-frame{position:relative;height:200px;border-radius:8px;overflow:hidden;background-color:rgba(0,0,0,.3);background-image:linear-gradient(rgba(255,255,255,.06) 1px,transparent 1px),linear-gradient(90deg,rgba(255,255,255,.06) 1px,transparent 1px);background-size:35px 20px;}
.chart-svg{position:absolute;inset:0;width:100%;height:100%;}
.chart-area{fill:rgba(0,255,136,.18);filter:drop-shadow(0 0 8px rgba(0,255,136,.5));animation:pulse 3s ease-in-out infinite;}
.chart-line{fill:none;stroke-linecap:round;}
.chart-line.profit{stroke:var(--neon-green);stroke-width:3;animation:pulse 3s ease-in-out infinite;}
.chart-line.loss{stroke:var(--loss-red);stroke-width:2;}
.chart-dot.profit{fill:var(--neon-green);animation:pulse 1.5s ease-in-out infinite;}
.chart-dot.loss{fill:var(--loss-red);}
.chart-readout{position:absolute;top:16px;left:16px;display:flex;align-items:baseline;gap:8px;}
.chart-price{font-size:34px;font-weight:700;text-shadow:0 0 8px rgba(255,255,255,.5);}
.chart-delta{font-size:19px;font-weight:600;transition:color .5s;}
.chart-delta.up{color:#22c55e;}
.chart-delta.down{color:#ef4444;}
.chart-indicators{position:absolute;bottom:8px;left:8px;font-size:12px;}
.indicator{display:flex;align-items:center;gap:8px;margin-top:4px;}
.indicator.profit{color:#4ade80;}
.indicator.loss{color:#f87171;}
.indicator-dot{width:8px;height:8px;border-radius:50%;background:currentColor;animation:pulse 2s ease-in-out infinite;}
.float-badge{position:absolute;padding:8px 16px;border-radius:8px;border:1px solid var(--border);background:rgba(19,19,27,.6);backdrop-filter:blur(4px);font-size:14px;color:var(--text-muted);animation:float 3s ease-in-out infinite;}
.performance-badge{display:flex;flex-direction:column;align-items:flex-start;}
.performance-label{font-size:12px;}
.performance-value{font-size:17px;font-weight:600;color:var(--neon-green);}

.section-header{text-align:center;margin-bottom:64px;}
.section-header.align-left{text-align:left;}
.section-title{font-size:42px;font-weight:700;margin:0 0 16px;}
.accent{color:var(--neon-green);text-shadow:0 0 7px var(--neon-green);}
.section-description{font-size:19px;color:var(--text-muted);max-width:720px;margin:0 auto;}
.section-header.align-left .section-description{margin:0;}

.features{padding:80px 0;}
.feature-group{margin-bottom:64px;}
.feature-group-title{font-size:28px;font-weight:700;text-align:center;margin:0 0 32px;background:linear-gradient(90deg,var(--accent-orange),var(--accent-orange-light));-webkit-background-clip:text;background-clip:text;color:transparent;}
.feature-grid{display:grid;gap:16px;}
.feature-grid-columns{grid-template-columns:repeat(3,1fr);gap:32px;}
.feature-grid-rows{grid-template-columns:1fr;}
@media(max-width:768px){.feature-grid-columns{grid-template-columns:1fr;}}
.feature-card{display:flex;align-items:flex-start;gap:12px;padding:16px;border-radius:12px;border:1px solid var(--border);background:linear-gradient(135deg,rgba(30,41,82,.4),rgba(13,13,13,.8));backdrop-filter:blur(8px);transition:transform .1s,border-color .3s;}
.feature-card:hover{transform:scale(1.03);border-color:#60a5fa;}
.feature-icon{flex-shrink:0;width:40px;height:40px;display:flex;align-items:center;justify-content:center;border-radius:8px;background:linear-gradient(90deg,rgba(59,130,246,.3),rgba(109,40,217,.3));font-size:20px;}
.feature-title{font-size:16px;font-weight:600;margin:0 0 8px;}
.feature-description{font-size:14px;color:var(--text-muted);margin:0;}

.how-it-works{padding:80px 0;background:linear-gradient(180deg,var(--deep-black),#0b1020);}
.how-grid{display:grid;grid-template-columns:1fr 1fr;gap:64px;align-items:center;}
@media(max-width:1023px){.how-grid{grid-template-columns:1fr;}}
.step-list{display:flex;flex-direction:column;gap:40px;}
.step{display:flex;gap:24px;}
.step-badge{flex-shrink:0;width:64px;height:64px;display:flex;align-items:center;justify-content:center;border-radius:50%;border:1px solid rgba(249,115,22,.4);background:linear-gradient(90deg,rgba(249,115,22,.3),rgba(220,38,38,.3));font-size:28px;}
.step-heading{display:flex;align-items:center;gap:12px;}
.step-number{font-size:28px;font-weight:700;background:linear-gradient(90deg,#fb923c,#ef4444);-webkit-background-clip:text;background-clip:text;color:transparent;}
.step-title{font-size:22px;font-weight:600;margin:0;}
.step-description{color:var(--text-muted);margin:8px 0 0;}
.how-visual{position:relative;height:384px;border:1px solid rgba(249,115,22,.3);border-radius:24px;background:linear-gradient(135deg,rgba(30,41,82,.4),rgba(13,13,13,.8));backdrop-filter:blur(12px);display:flex;align-items:center;justify-content:center;}
.ai-core{position:relative;width:128px;height:128px;display:flex;align-items:center;justify-content:center;border-radius:50%;border:1px solid rgba(251,146,60,.6);background:rgba(19,19,27,.8);animation:pulse 3s ease-in-out infinite;}
.ai-core-glyph{font-size:56px;}
.ai-core-ring{position:absolute;width:96px;height:96px;border:1px dashed rgba(234,88,12,.3);border-radius:50%;animation:spin 12s linear infinite;}
.panel-item{position:absolute;width:128px;padding:8px;border-radius:8px;border:1px solid rgba(75,85,99,.5);background:rgba(31,41,55,.7);font-size:12px;text-align:center;color:#fdba74;transform:translate(-50%,0);}
.panel-item-glyph{display:block;font-size:20px;margin-bottom:4px;}

.about{padding:80px 0;background:linear-gradient(180deg,#0b1020,var(--deep-black));}
.about-lead{font-size:19px;color:#d1d5db;max-width:880px;margin:0 auto 24px;text-align:justify;}
.about-mission{font-size:17px;color:var(--text-muted);max-width:880px;margin:0 auto;}
.stats-grid{display:grid;grid-template-columns:repeat(4,1fr);gap:32px;margin-bottom:64px;}
@media(max-width:768px){.stats-grid{grid-template-columns:repeat(2,1fr);}}
.stat{text-align:center;}
.stat-icon{width:64px;height:64px;margin:0 auto 16px;display:flex;align-items:center;justify-content:center;border-radius:50%;background:linear-gradient(90deg,rgba(249,115,22,.3),rgba(220,38,38,.3));font-size:28px;}
.stat-number{font-size:28px;font-weight:700;}
.stat-label{font-size:17px;font-weight:600;color:#d1d5db;}
.stat-description{font-size:14px;color:var(--text-muted);margin-top:4px;}
.team-panel{border:1px solid rgba(249,115,22,.3);border-radius:16px;padding:48px;background:linear-gradient(135deg,rgba(30,41,82,.4),rgba(13,13,13,.8));backdrop-filter:blur(12px);}
.team-heading{text-align:center;margin-bottom:32px;}
.team-title{font-size:24px;font-weight:700;margin:0 0 12px;}
.team-subtitle{color:var(--text-muted);margin:0;}
.team-grid{display:grid;grid-template-columns:repeat(3,1fr);gap:32px;}
@media(max-width:768px){.team-grid{grid-template-columns:1fr;}}
.team-member{text-align:center;}
.team-photo{width:96px;height:96px;object-fit:cover;border-radius:50%;border:1px solid rgba(75,85,99,.4);margin-bottom:16px;}
.team-name{font-size:17px;font-weight:600;margin:0;}
.team-role{color:var(--text-muted);margin:4px 0 0;}

.footer{border-top:1px solid rgba(30,58,138,.4);padding:48px 0 0;}
.footer-grid{display:grid;grid-template-columns:2fr 1fr 1fr;gap:32px;padding-bottom:32px;}
@media(max-width:768px){.footer-grid{grid-template-columns:1fr;}}
.footer-title{font-size:24px;font-weight:700;color:var(--neon-green);margin:0 0 16px;}
.footer-blurb{color:var(--text-muted);margin:0;}
.footer-heading{font-size:17px;font-weight:600;margin:0 0 16px;}
.footer-links{list-style:none;margin:0;padding:0;}
.footer-links li{margin-bottom:8px;}
.footer-link{color:var(--text-muted);transition:color .3s,transform .3s;display:inline-block;}
.footer-link:hover{color:var(--text-primary);transform:translateX(8px);}
.social-row{display:flex;gap:16px;}
.social-link{width:40px;height:40px;display:flex;align-items:center;justify-content:center;border-radius:50%;border:1px solid rgba(59,130,246,.4);background:#1f2937;transition:transform .5s;}
.social-link:hover{transform:scale(1.25) rotate(12deg);}
.footer-bottom{border-top:1px solid rgba(30,58,138,.4);padding:32px 0;text-align:center;}
.footer-copyright{font-size:14px;color:var(--text-muted);margin:0;}

.page-header{padding:128px 0 32px;text-align:center;}
.page-title{font-size:42px;font-weight:700;margin:0 0 8px;}
.page-description{font-size:19px;color:var(--text-muted);margin:0;}

.doc-page{min-height:100vh;padding:32px;background:radial-gradient(ellipse at 50% -20%,rgba(0,0,139,.3),transparent 80%) var(--deep-black);}
.doc-brand{position:absolute;top:16px;left:48px;display:flex;align-items:center;gap:8px;font-size:28px;font-weight:700;color:var(--neon-green);}
.doc-brand:hover{text-decoration:underline;}
.doc-brand-logo{width:32px;height:32px;}
.doc-title{font-size:48px;font-weight:700;text-align:center;margin:0 0 32px;padding-top:96px;letter-spacing:-.02em;}
.doc-description{font-size:22px;font-weight:600;text-align:center;color:#d1d5db;max-width:760px;margin:0 auto 64px;}
.doc-tabs{max-width:1180px;margin:0 auto;display:grid;gap:32px;}
.doc-tab-card{display:flex;align-items:center;gap:24px;padding:16px 32px;border-radius:16px;border:1px solid var(--border);background:rgba(0,0,0,.4);transition:transform .3s,box-shadow .3s;}
.doc-tab-card:hover{transform:scale(1.03);box-shadow:0 0 20px rgba(160,79,252,.5);}
.doc-tab-icon{font-size:40px;color:#a04ffc;filter:drop-shadow(0 0 10px #a04ffc);}
.doc-tab-heading{font-size:22px;font-weight:600;color:#f97316;margin:0 0 4px;text-shadow:0 0 5px #ff7e25;}
.doc-tab-description{color:#e5e7eb;margin:0;}
.doc-explore{display:flex;justify-content:center;margin:96px 0 16px;}
.btn-explore{background:#f97316;color:#fff;padding:20px 56px;border-radius:12px;font-size:20px;font-weight:700;filter:drop-shadow(0 0 10px #ff7e25);transition:transform .3s,filter .3s;}
.btn-explore:hover{transform:scale(1.1);filter:drop-shadow(0 0 25px #ff7e25);}

.usage-tab{max-width:1080px;margin:0 auto 80px;}
.usage-tab-header{display:flex;align-items:center;gap:24px;padding:24px;margin-bottom:48px;border-radius:16px;border:1px solid var(--border);background:rgba(0,0,0,.4);transition:transform .3s,box-shadow .3s;}
.usage-tab-header:hover{transform:scale(1.03);box-shadow:0 0 20px rgba(160,79,252,.5);}
.usage-tab-icon{font-size:40px;color:#a04ffc;filter:drop-shadow(0 0 10px #a04ffc);}
.usage-tab-title{font-size:28px;font-weight:700;color:#f97316;margin:0;}
.step-box{padding:24px;margin-bottom:32px;border-radius:12px;border:1px solid var(--border);background:rgba(255,255,255,.05);backdrop-filter:blur(4px);font-size:17px;}
.step-box p{margin:0 0 12px;}
.step-box p:last-child{margin-bottom:0;}
.step-lead{font-weight:600;font-size:19px;}
.usage-list{margin:16px 0 0;padding-left:24px;}
.usage-list li{margin-bottom:8px;}
.usage-caption{font-weight:700;font-size:17px;margin:0 0 16px;}
.image-row{display:flex;justify-content:center;margin-bottom:48px;}
.image-grid{display:grid;gap:24px;margin-bottom:48px;}
.image-grid.cols-2{grid-template-columns:repeat(2,1fr);}
.image-grid.cols-3{grid-template-columns:repeat(3,1fr);}
@media(max-width:768px){.image-grid.cols-2,.image-grid.cols-3{grid-template-columns:1fr;}}
.usage-image{max-width:100%;max-height:320px;object-fit:contain;border-radius:8px;box-shadow:0 10px 30px rgba(0,0,0,.5);}
.launch-row{display:flex;justify-content:center;margin:48px 0;}
.btn-launch{background:linear-gradient(90deg,var(--accent-orange),var(--accent-orange-light));padding:20px 64px;border-radius:16px;font-size:24px;}
.page-footer-bar{background:rgba(0,0,0,.5);text-align:center;padding:16px;margin-top:48px;border-radius:8px;font-size:14px;}

.not-found{padding:160px 0;text-align:center;}
.not-found .btn{margin-top:24px;}

.fade-in-up{animation:fade-in-up .8s ease-out forwards;opacity:0;}
.fade-in-left{animation:fade-in-left .8s ease-out forwards;opacity:0;}
.fade-in-right{animation:fade-in-right .8s ease-out forwards;opacity:0;}
@keyframes fade-in-up{from{opacity:0;transform:translateY(30px);}to{opacity:1;transform:translateY(0);}}
@keyframes fade-in-left{from{opacity:0;transform:translateX(-30px);}to{opacity:1;transform:translateX(0);}}
@keyframes fade-in-right{from{opacity:0;transform:translateX(30px);}to{opacity:1;transform:translateX(0);}}
@keyframes pulse{0%,100%{opacity:1;}50%{opacity:.55;}}
@keyframes float{0%,100%{transform:translateY(0);}50%{transform:translateY(-8px);}}
@keyframes spin{from{transform:rotate(0);}to{transform:rotate(360deg);}}
"#;
