//! The MazeBreak Sprint 0 board: a combat sandbox gate before Sprint 1.

use super::plan::LabelKey::*;
use super::plan::{BoardPlan, CardSpec, ChecklistSpec, LabelKey};

const GATE: &str = "S0-00";
const C1: &str = "S0-01";
const C2: &str = "S0-02";
const C3: &str = "S0-03";
const C4: &str = "S0-04";
const C5: &str = "S0-05";
const C6: &str = "S0-06";
const C7: &str = "S0-07";
const C8: &str = "S0-08";
const EXIT: &str = "S0-09";

pub const DEFINITION_OF_DONE: &[&str] = &[
    "Runs in Studio with zero errors in Output",
    "Server-authoritative rules not violated (no client damage outcomes)",
    "No gameplay logic placed in Workspace",
    "Code is modular (Managers/Systems), no spaghetti in random scripts",
    "No magic numbers: key constants centralized + named",
    "Basic logging added where it helps debugging (not spammy)",
    "Edge cases handled (nil targets, dead targets, missing humanoid)",
    "Performance sanity: no runaway loops / no heavy per-frame work",
    "Quick manual test performed and recorded in checklist notes (what you tested)",
];

pub const LISTS: &[&str] = &[
    "🧪 Sprint 0 – Combat Prototype",
    "🔜 Sprint 1 – Core Loop",
    "📦 Backlog",
    "✅ Done",
];

pub const SPRINT_0: BoardPlan = BoardPlan {
    workspace_name: "MazeBreak Development",
    workspace_desc: "Workspace for MazeBreak Roblox game development (Sprint-driven execution).",
    board_name: "MazeBreak – Core Development",
    board_desc: "Sprint board for MazeBreak. Sprint 0 is a combat sandbox gate. No gate pass = no Sprint 1.",
    lists: LISTS,
    card_list: "🧪 Sprint 0 – Combat Prototype",
    labels: &LabelKey::ALL,
    cards: CARDS,
    definition_of_done: DEFINITION_OF_DONE,
};

const CARDS: &[CardSpec] = &[
    CardSpec {
        id: GATE,
        title: "SPRINT 0 – Gate Rules (Read First)",
        depends_on: &[],
        labels: &[Critical, Architecture],
        description: &[
            "## Sprint Goal",
            "Build a tight, readable, fair combat sandbox proving:",
            "- Combat feels responsive",
            "- Telegraphs are readable",
            "- Damage feels satisfying",
            "- Death feels fair",
            "- Server authority is stable",
            "",
            "## Constraints (Non-Negotiable)",
            "- Solo play only",
            "- Flat test arena only",
            "- 1 enemy (Zombie Tier 1)",
            "- 1 weapon / 1 attack input",
            "- Server-authoritative combat",
            "- Clean Roblox architecture from day one",
            "",
            "## What You DO NOT Build in Sprint 0",
            "- StageManager / procedural rooms",
            "- Loot / XP / economy / DataStore",
            "- Affinity full system (placeholder only)",
            "- Multiple weapons",
            "- Boss",
            "",
            "## Dependency Model",
            "Cards are ordered. Finish earlier IDs first. If you skip dependencies, you will create bugs and rework.",
        ],
        checklists: &[ChecklistSpec {
            title: "Sprint 0 Setup Checklist",
            items: &[
                "Confirm test place is a flat arena (no stages)",
                "Confirm only one enemy + one weapon scope",
                "Confirm server owns hit + damage outcomes",
                "Confirm NO gameplay logic in Workspace",
            ],
        }],
        dev_notes: Some(&[
            "DEV NOTES (Architecture & Pitfalls)",
            "- Treat Sprint 0 like building the game's spine.",
            "- If you \"just hack it for now,\" Sprint 1 will collapse under debt.",
            "- Keep every combat decision on server. Client only requests + displays feedback.",
        ]),
    },
    CardSpec {
        id: C1,
        title: "CARD 1 — Project Foundation Setup",
        depends_on: &[GATE],
        labels: &[Critical, Architecture, Server],
        description: &[
            "## Objective",
            "Establish clean architecture before writing gameplay logic.",
            "",
            "## Depends On",
            "- S0-00",
            "",
            "## Folder Structure (Create Immediately)",
            "ServerScriptService",
            "  - Managers",
            "  - Systems",
            "",
            "ReplicatedStorage",
            "  - Remotes",
            "  - Shared",
            "  - Data",
            "",
            "StarterPlayer",
            "  - StarterPlayerScripts",
            "",
            "## Completion Criteria",
            "- Server boots without errors",
            "- Structure exists exactly as specified",
            "- No combat/health logic yet",
        ],
        checklists: &[ChecklistSpec {
            title: "Execution Checklist (Ordered)",
            items: &[
                "Create folders exactly as specified (no extras yet)",
                "Create ServerScriptService/Bootstrap.server.lua",
                "Bootstrap prints startup banner + confirms folders/modules found",
                "Add placeholder modules: Managers/CombatManager, Systems/DamageResolver (no logic yet)",
                "Server starts clean with zero errors/warnings",
            ],
        }],
        dev_notes: Some(&[
            "DEV NOTES (Architecture & Pitfalls)",
            "- Put long-lived systems in ServerScriptService as ModuleScripts; bootstrap should be thin.",
            "- Don't start writing gameplay logic until this is clean; otherwise you'll scatter dependencies.",
            "- Keep naming consistent: Managers = orchestration, Systems = pure logic utilities.",
        ]),
    },
    CardSpec {
        id: C2,
        title: "CARD 2 — Remotes + InputController (Client)",
        depends_on: &[C1],
        labels: &[Critical, Client, Combat],
        description: &[
            "## Objective",
            "Create responsive attack input that requests server validation.",
            "",
            "## Depends On",
            "- S0-01",
            "",
            "## RemoteEvent",
            "ReplicatedStorage/Remotes/AttackRequest (RemoteEvent)",
            "",
            "## Client Script",
            "StarterPlayerScripts/InputController.client.lua",
            "",
            "## Responsibilities",
            "- Detect attack input (mouse button 1 or space)",
            "- Fire AttackRequest:FireServer()",
            "- Local throttle ONLY for input feel (visual). Client never decides hit/damage.",
            "",
            "## Completion Criteria",
            "- Clicking/pressing triggers server call",
            "- No spam (client throttle + server validation later)",
            "- No client damage logic anywhere",
        ],
        checklists: &[
            ChecklistSpec {
                title: "Execution Checklist (Ordered)",
                items: &[
                    "Create AttackRequest RemoteEvent in ReplicatedStorage/Remotes",
                    "Create InputController.client.lua in StarterPlayerScripts",
                    "Bind attack input (UIS or CAS) and fire AttackRequest:FireServer()",
                    "Add local throttle to prevent spam FireServer (visual only)",
                    "Test: clicks fire instantly with no console errors",
                ],
            },
            ChecklistSpec {
                title: "Acceptance Tests",
                items: &[
                    "Spam click does NOT freeze client",
                    "Remote fires instantly on input",
                    "No client damage calculations exist",
                ],
            },
        ],
        dev_notes: Some(&[
            "DEV NOTES (Architecture & Pitfalls)",
            "- Client throttle is a UX improvement only; server must still enforce real cooldown.",
            "- Don't send 'hit results' from client. Only send \"I attempted attack.\"",
            "- Keep InputController tiny; avoid mixing UI logic in here.",
        ]),
    },
    CardSpec {
        id: C3,
        title: "CARD 3 — CombatManager (Server Authority Core)",
        depends_on: &[C2, C1],
        labels: &[Critical, Server, Combat],
        description: &[
            "## Objective",
            "Server-authoritative attack validation + hit detection + damage requests.",
            "",
            "## Depends On",
            "- S0-01",
            "- S0-02",
            "",
            "## Create",
            "ServerScriptService/Managers/CombatManager.server.lua",
            "",
            "## Responsibilities",
            "- Listen to AttackRequest",
            "- Validate server cooldown per player",
            "- Perform hit detection (Sprint 0 = distance check)",
            "- Call DamageResolver.ApplyDamage(attacker, target, amount)",
            "- Enforce invulnerability window",
            "",
            "## Completion Criteria",
            "- Server rejects spam attacks",
            "- Enemy takes damage via DamageResolver only",
            "- Invulnerability prevents double-hit bug",
        ],
        checklists: &[
            ChecklistSpec {
                title: "Execution Checklist (Ordered)",
                items: &[
                    "CombatManager listens to AttackRequest.OnServerEvent",
                    "Implement server cooldown tracking (lastAttackTime[player])",
                    "Implement simple distance hit check vs Zombie",
                    "Call DamageResolver.ApplyDamage() on hit",
                    "Add invulnerability window logic (i-frames) per target",
                    "Test: spam click does not increase DPS beyond cooldown",
                ],
            },
            ChecklistSpec {
                title: "Acceptance Tests",
                items: &[
                    "No double damage from one click",
                    "Attacks miss when out of range",
                    "Invuln blocks rapid chain hits",
                ],
            },
        ],
        dev_notes: Some(&[
            "DEV NOTES (Architecture & Pitfalls)",
            "- Keep CombatManager as an orchestrator: validate + route to systems.",
            "- Don't subtract health in CombatManager. Always go through DamageResolver.",
            "- If you add effects, don't hardcode them here—emit events/hooks later.",
        ]),
    },
    CardSpec {
        id: C4,
        title: "CARD 4 — DamageResolver (Single Source of Truth)",
        depends_on: &[C3, C1],
        labels: &[Critical, Server, Architecture],
        description: &[
            "## Objective",
            "Centralize all damage/death logic in one system.",
            "",
            "## Depends On",
            "- S0-01",
            "- S0-03",
            "",
            "## Create",
            "ServerScriptService/Systems/DamageResolver.lua (ModuleScript)",
            "",
            "## API",
            "DamageResolver.ApplyDamage(attacker, target, baseDamage)",
            "",
            "## Completion Criteria",
            "- All damage routed through DamageResolver",
            "- Death triggers once, cleanly",
        ],
        checklists: &[
            ChecklistSpec {
                title: "Execution Checklist (Ordered)",
                items: &[
                    "Create DamageResolver.ApplyDamage(attacker, target, baseDamage)",
                    "Add guards (nil, dead, missing humanoid) + clamp health >= 0",
                    "Implement enemy death: delay then Destroy",
                    "Implement player death placeholder: disable movement + message",
                    "Ensure only DamageResolver modifies health values",
                ],
            },
            ChecklistSpec {
                title: "Acceptance Tests",
                items: &[
                    "Target death triggers once",
                    "No negative HP after repeated hits",
                    "No other script subtracts health directly",
                ],
            },
        ],
        dev_notes: Some(&[
            "DEV NOTES (Architecture & Pitfalls)",
            "- This module becomes your long-term combat 'truth.' Keep it clean.",
            "- Make it deterministic and boring (that's good). Effects/juice can layer later.",
            "- Avoid hidden side effects; return a result object later if needed.",
        ]),
    },
    CardSpec {
        id: C5,
        title: "CARD 5 — Enemy: Zombie (Tier 1 State Machine)",
        depends_on: &[C4, C3],
        labels: &[Critical, Server, Enemy, Combat],
        description: &[
            "## Objective",
            "One functional enemy with readable telegraphs and fair attacks.",
            "",
            "## Depends On",
            "- S0-03",
            "- S0-04",
            "",
            "## Template Location",
            "ServerStorage/EnemyTemplates/Zombie",
            "",
            "## State Machine",
            "Idle -> Chase -> WindUp -> Attack -> Cooldown",
            "",
            "## Fairness Requirement",
            "If player dies and says: \"I didn't see that coming.\" you failed.",
        ],
        checklists: &[
            ChecklistSpec {
                title: "Execution Checklist (Ordered)",
                items: &[
                    "Create Zombie template in ServerStorage/EnemyTemplates",
                    "Implement detection within 25 studs (Idle -> Chase)",
                    "Implement MoveTo chase (no pathfinding)",
                    "Implement WindUp telegraph (0.5s) before damage",
                    "Apply damage via DamageResolver once per swing",
                    "Cooldown (1.5s) prevents chain hits",
                    "Test: player can back up during wind-up to avoid hit",
                ],
            },
            ChecklistSpec {
                title: "Acceptance Tests",
                items: &[
                    "Zombie does not hit if player leaves range before attack moment",
                    "Zombie cannot deal damage during Cooldown",
                    "Telegraph is visually readable and consistent",
                ],
            },
        ],
        dev_notes: Some(&[
            "DEV NOTES (Architecture & Pitfalls)",
            "- Your enemy is a 'teacher'—it teaches fairness through consistent telegraphs.",
            "- Don't hide attack timing in animations only; sync with clear state timing.",
            "- Ensure AI loop isn't running heavy logic every frame. Use heartbeat carefully.",
        ]),
    },
    CardSpec {
        id: C6,
        title: "CARD 6 — Health System + Damage Feedback (Player & Enemy)",
        depends_on: &[C4, C5],
        labels: &[Critical, Server, Ui],
        description: &[
            "## Objective",
            "Health behavior + feedback that supports fairness and readability.",
            "",
            "## Depends On",
            "- S0-04",
            "- S0-05",
            "",
            "## Targets",
            "Player: MaxHealth=100, Enemy: Health=50",
        ],
        checklists: &[
            ChecklistSpec {
                title: "Execution Checklist (Ordered)",
                items: &[
                    "Set player MaxHealth to 100 on spawn",
                    "Set zombie health to 50 on spawn",
                    "Player damage feedback (flash red + hit sound)",
                    "Enemy feedback (flinch / brief pause / reaction)",
                    "Player death placeholder (disable movement + fade + message)",
                    "Enemy death delay then destroy",
                ],
            },
            ChecklistSpec {
                title: "Acceptance Tests",
                items: &[
                    "No desync: server is truth",
                    "Player can't die twice",
                    "Enemy stops acting after death",
                ],
            },
        ],
        dev_notes: Some(&[
            "DEV NOTES (Architecture & Pitfalls)",
            "- Keep feedback decoupled: DamageResolver triggers events/hooks; UI listens.",
            "- Don't mix UI creation with server health logic.",
            "- Clamp and validate everything; early prototypes die from edge cases.",
        ]),
    },
    CardSpec {
        id: C7,
        title: "CARD 7 — Basic HUD (Server-Truth Health Only)",
        depends_on: &[C6],
        labels: &[Critical, Client, Ui],
        description: &[
            "## Objective",
            "Minimal HUD reflecting real server health.",
            "",
            "## Depends On",
            "- S0-06",
            "",
            "## UI",
            "- Health bar",
            "- Numeric health display",
        ],
        checklists: &[
            ChecklistSpec {
                title: "Execution Checklist (Ordered)",
                items: &[
                    "Create ScreenGui with health bar + number",
                    "Bind UI updates to replicated health source (Sprint 0 acceptable)",
                    "Clamp UI values to 0–100",
                    "Test: UI updates immediately on damage",
                ],
            },
            ChecklistSpec {
                title: "Acceptance Tests",
                items: &[
                    "UI matches server health truth",
                    "No heavy per-frame loops for UI updates",
                ],
            },
        ],
        dev_notes: Some(&[
            "DEV NOTES (Architecture & Pitfalls)",
            "- Avoid per-frame polling. Use Changed events where possible.",
            "- Don't 'predict' health client-side. Sprint 0 = trust server.",
            "- Keep HUD simple; this is signal, not polish.",
        ]),
    },
    CardSpec {
        id: C8,
        title: "CARD 8 — Feel Tuning Pass (20+ Fights Minimum)",
        depends_on: &[C7],
        labels: &[Critical, Polish, Combat],
        description: &[
            "## Objective",
            "Make it FEEL right. No feature expansion. Only iteration.",
            "",
            "## Depends On",
            "- S0-07",
            "",
            "## Minimum Playtest",
            "Play 20+ fights.",
        ],
        checklists: &[
            ChecklistSpec {
                title: "Tuning Runs (Ordered)",
                items: &[
                    "Run 10 fights baseline and note pain points",
                    "Adjust one variable at a time (cooldown/range/speed/wind-up/i-frames)",
                    "Run 10 fights iteration build and compare",
                    "Lock best values and document final tuning numbers in this card",
                ],
            },
            ChecklistSpec {
                title: "Acceptance Tests",
                items: &[
                    "Telegraphs are readable (you can react consistently)",
                    "Spam clicking doesn't dominate",
                    "Death feels fair (no surprise hits)",
                ],
            },
        ],
        dev_notes: Some(&[
            "DEV NOTES (Architecture & Pitfalls)",
            "- Don't 'fix' feel by adding features. Fix feel with timing and clarity.",
            "- If it feels cheap, increase telegraph clarity before changing damage numbers.",
            "- Record final values so Sprint 1 doesn't accidentally drift them.",
        ]),
    },
    CardSpec {
        id: EXIT,
        title: "SPRINT 0 EXIT CHECKLIST — Ship/No-Ship Gate",
        depends_on: &[C8],
        labels: &[Critical, Architecture, Combat],
        description: &[
            "## You move forward ONLY if ALL checks are true.",
            "",
            "## Depends On",
            "- S0-08",
            "",
            "If any item fails: you stay in Sprint 0 until it passes.",
        ],
        checklists: &[ChecklistSpec {
            title: "Gate Checks",
            items: &[
                "Combat responsiveness feels immediate (no noticeable input delay)",
                "Telegraphs readable (player can react during wind-up)",
                "Damage satisfying (clear feedback on hit)",
                "No chain-death / double-hit bug",
                "Server rejects spam attacks reliably",
                "Health UI matches server truth",
                "No major errors in Output during play",
                "Death feels fair (no surprise hits)",
            ],
        }],
        dev_notes: Some(&[
            "DEV NOTES (Architecture & Pitfalls)",
            "- This is your quality gate. If you skip it, you'll build a bigger bad game faster.",
            "- 'Mostly works' is not good enough for combat.",
        ]),
    },
];
