//! Self-contained HTML page for the demo chat widget.
//!
//! Single document with inline CSS/JS, no external assets. The page keeps no
//! logic beyond fetch-and-insert: the server resolves replies, formats them,
//! and returns ready-to-insert HTML fragments.

use crate::markup::escape_html;
use crate::transcript::GREETING;

/// Build the complete HTML page for the demo chat widget.
pub fn build_demo_html() -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>SupportAgent AI — Demo Chat</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box}}
body{{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;background:#10131a;color:#d6dae3;height:100vh;display:flex;flex-direction:column}}
.header{{padding:14px 20px;background:#161b26;border-bottom:1px solid #232a3a;display:flex;align-items:center;gap:12px}}
.header h1{{font-size:16px;font-weight:600;color:#6ea8fe}}
.header .dot{{width:8px;height:8px;border-radius:50%;background:#444;transition:background .3s}}
.header .dot.online{{background:#2fbf71}}
.header .status{{font-size:12px;color:#8b93a3;margin-left:auto}}
.toolbar{{padding:8px 20px;background:#161b26;border-bottom:1px solid #232a3a;display:flex;align-items:center;gap:8px;flex-wrap:wrap;font-size:12px;color:#8b93a3}}
.toolbar .count{{margin-right:auto}}
.toolbar button{{padding:5px 12px;background:#1d2434;color:#aeb6c6;border:1px solid #2a3347;border-radius:14px;font-size:12px;cursor:pointer}}
.toolbar button:hover{{border-color:#6ea8fe;color:#d6dae3}}
.messages{{flex:1;overflow-y:auto;padding:20px;display:flex;flex-direction:column;gap:10px}}
.msg{{max-width:80%;padding:10px 14px;border-radius:12px;font-size:14px;line-height:1.5;word-wrap:break-word}}
.msg.user{{align-self:flex-end;background:#243049;border:1px solid #31405f;white-space:pre-wrap}}
.msg.bot{{align-self:flex-start;background:#161b26;border:1px solid #232a3a}}
.msg.bot ul{{margin:6px 0 6px 18px}}
.msg.bot h3,.msg.bot h4{{margin:8px 0 4px}}
.msg.bot code{{background:#0c0f15;border-radius:4px;padding:1px 5px;font-size:13px}}
.msg.error{{align-self:center;color:#f06a6a;font-size:13px}}
.typing{{align-self:flex-start;color:#8b93a3;font-size:13px;padding:4px 14px}}
.typing::after{{content:'...';animation:dots 1.2s infinite}}
@keyframes dots{{0%,20%{{content:'.'}}40%{{content:'..'}}60%,100%{{content:'...'}}}}
.input-bar{{padding:14px 20px;background:#161b26;border-top:1px solid #232a3a;display:flex;gap:8px}}
.input-bar textarea{{flex:1;padding:10px 14px;border:1px solid #2a3347;border-radius:8px;background:#0c0f15;color:#d6dae3;font-size:14px;font-family:inherit;resize:none;outline:none;max-height:120px}}
.input-bar textarea:focus{{border-color:#6ea8fe}}
.input-bar button{{padding:10px 20px;background:#6ea8fe;color:#0c0f15;border:none;border-radius:8px;font-weight:600;cursor:pointer;white-space:nowrap}}
.input-bar button.secondary{{background:#1d2434;color:#aeb6c6;border:1px solid #2a3347}}
</style>
</head>
<body>
<div class="header">
  <div class="dot" id="dot"></div>
  <h1>SupportAgent AI</h1>
  <span class="status" id="statusText">Checking connection…</span>
</div>
<div class="toolbar">
  <span class="count">Messages: <span id="messageCount">0</span></span>
  <button onclick="sendExample('I forgot my password')">I forgot my password</button>
  <button onclick="sendExample('What subscription plans do you offer?')">Subscription plans</button>
  <button onclick="sendExample('I want to cancel my subscription')">Cancel subscription</button>
</div>
<div class="messages" id="messages">
  <div class="msg bot">{greeting}</div>
</div>
<div class="input-bar">
  <textarea id="chatInput" placeholder="Type a message..." rows="1" autofocus></textarea>
  <button onclick="send()">Send</button>
  <button class="secondary" onclick="clearChat()">Clear</button>
</div>
<script>
let sessionId=null,busy=false;
const msgs=document.getElementById("messages");
const inp=document.getElementById("chatInput");
const dot=document.getElementById("dot");
const statusEl=document.getElementById("statusText");
const countEl=document.getElementById("messageCount");

async function checkStatus(){{
  try{{
    const res=await fetch("/api/status");
    const d=await res.json();
    if(d.connected){{
      dot.classList.add("online");
      statusEl.textContent=`Connected to ${{d.service}} v${{d.version}}`;
      return;
    }}
  }}catch(e){{}}
  dot.classList.remove("online");
  statusEl.textContent="Demo mode — canned replies";
}}

function addUser(text){{
  const d=document.createElement("div");
  d.className="msg user";
  d.textContent=text;
  msgs.appendChild(d);
  msgs.scrollTop=msgs.scrollHeight;
}}

function addBot(html){{
  const d=document.createElement("div");
  d.className="msg bot";
  d.innerHTML=html;
  msgs.appendChild(d);
  msgs.scrollTop=msgs.scrollHeight;
}}

function addError(text){{
  const d=document.createElement("div");
  d.className="msg error";
  d.textContent=text;
  msgs.appendChild(d);
  msgs.scrollTop=msgs.scrollHeight;
}}

function showTyping(){{
  removeTyping();
  const d=document.createElement("div");
  d.className="typing";
  d.id="typing";
  d.textContent="SupportAgent is typing";
  msgs.appendChild(d);
  msgs.scrollTop=msgs.scrollHeight;
}}

function removeTyping(){{
  const el=document.getElementById("typing");
  if(el)el.remove();
}}

async function send(){{
  if(busy)return;
  const text=inp.value.trim();
  if(!text)return;
  inp.value="";
  inp.style.height="auto";
  addUser(text);
  busy=true;
  showTyping();
  try{{
    const res=await fetch("/api/message",{{
      method:"POST",
      headers:{{"Content-Type":"application/json"}},
      body:JSON.stringify({{sessionId,message:text}})
    }});
    if(!res.ok)throw new Error(`request failed: ${{res.status}}`);
    const d=await res.json();
    sessionId=d.sessionId;
    countEl.textContent=d.messageCount;
    removeTyping();
    addBot(d.replyHtml);
  }}catch(e){{
    removeTyping();
    addError("Something went wrong: "+e.message);
  }}finally{{
    busy=false;
  }}
}}

function sendExample(text){{
  inp.value=text;
  send();
}}

async function clearChat(){{
  if(sessionId){{
    try{{
      await fetch("/api/clear",{{
        method:"POST",
        headers:{{"Content-Type":"application/json"}},
        body:JSON.stringify({{sessionId}})
      }});
    }}catch(e){{}}
  }}
  msgs.innerHTML="";
  addBot("{greeting}");
  countEl.textContent="0";
}}

inp.addEventListener("keydown",(e)=>{{
  if(e.key==="Enter"&&!e.shiftKey){{e.preventDefault();send()}}
}});
inp.addEventListener("input",()=>{{
  inp.style.height="auto";
  inp.style.height=Math.min(inp.scrollHeight,120)+"px";
}});
checkStatus();
</script>
</body>
</html>"##,
        greeting = escape_html(GREETING)
    )
}
