//! Latin-script rules, wrapped in ASCII word boundaries when compiled.
//!
//! The table is split in three so the core profanity family keeps a fixed
//! position inside the bucket: head, core, tail are concatenated in order.

use super::Rule;

/// Rules preceding the core profanity family.
pub const PRIMARY_HEAD: &[Rule] = &[
    Rule::Template(r"aborted ?fetus"),
    Rule::Template(r"all?(?:uh|ah ?u?a?|uah) ?a+c?k(?:ba+r*)?"),
    Rule::Template(r"(?<!hearing)(?<!heawing)(?<!band) aids"),
    Rule::Template(r"akbar"),
    Rule::Template(r"anal(?:fisting)?"),
    Rule::Template(r"(?:my|your|his|her)?a[*]?nus"),
    Rule::Template(r"i want uranus"),
    Rule::Template(r"a n u s"),
    Rule::Template(r"poopoo hole"),
    Rule::Template(r"(?:b[i1]tch|fat)?a+[s$]{2,}(?:es|fucks?| ?w?holes?|hats?|lickers?|wipes?)?"),
    Rule::Template(r"arse? ?hole"),
    Rule::Template(r"as[*]+ole"),
    Rule::Template(r"{spaced:asshole:s}"),
    Rule::Template(r"a[*]+h[o0]les?"),
    Rule::Template(r"a+[sz2*$%#@&-]+h+oles?"),
    Rule::Template(r"your a s s"),
    Rule::Template(r"bootyhole"),
    Rule::Template(r"a{sep2}?s{sep2}?s"),
    Rule::Template(r"a+ss+m+e+a+t+"),
    Rule::Template(r"dumb a ss"),
    Rule::Template(r"autis(?:ts?|ms?|tic)"),
    Rule::Template(r"a *u *t *i *s *[mt]"),
    Rule::Template(r"bend over"),
    Rule::Template(r"bea?stiality"),
    Rule::Template(r"lets bang"),
    Rule::Template(r"bangs (?:her|him)"),
    Rule::Template(r"son ?of(?: ?a)? ?(?:bitch|beach)"),
    Rule::Template(r"beatch"),
    Rule::Template(r"beach no"),
    Rule::Template(r"you (beach|batch)"),
    Rule::Template(r"bitv?c ?h"),
    Rule::Template(r"b[%*]+ch"),
    Rule::Template(r"b[i1][s$]h"),
    Rule::Template(r"b[*]th"),
    Rule::Template(r"b[*]{2,}s"),
    Rule::Template(r"b(?:\*|{i})+[ae]*th?c+h+(?:e?[sz]+)?"),
    Rule::Template(r"b+i+t+s?c+h+"),
    Rule::Template(r"bit?ach(?:es)?"),
    Rule::Template(r"bit?<h(?:es)?"),
    Rule::Template(r"b[it*]+ch(?:e[sz]+)?"),
    Rule::Template(r"b+[i*]+c+t+h+"),
    Rule::Template(r"b[hw]itch"),
    Rule::Template(r"binch(?:es)?"),
    Rule::Template(r"bio ?tch(?:e[sz])?"),
    Rule::Template(r"(?:b|bi)[*]+(?:tch|ch|h)"),
    Rule::Template(r"bi?y[ao]tch"),
    Rule::Template(r"bi+ta+ch"),
    Rule::Template(r"betch(?:es)?"),
    Rule::Template(r"b *e +t *c +h"),
    Rule::Template(r"b +i +o +t +c +h"),
    Rule::Template(r"b-i-c-t-h"),
    Rule::Template(r"b +i +c +t +h"),
    Rule::Template(r"b\.? *i *c\.? *h"),
    Rule::Template(r"biti?chi"),
    Rule::Template(r"bit[sx]h"),
    Rule::Template(r"bithc"),
    Rule::Template(r"bitcj?"),
    Rule::Template(r"bihtch"),
    Rule::Template(r"b1ch"),
    Rule::Template(r"bxitch"),
    Rule::Template(r"(?:little|hi) b *e *a *c *h"),
    Rule::Template(r"b{sep2}tch"),
    Rule::Template(r"b{sep3}{3,}h"),
    Rule::Template(r"b(?:{i}|\|){t}{c}h"),
    Rule::Template(r"bi[ct] h"),
    Rule::Template(r"bicht(?:es)?"),
    Rule::Template(r"b[*]t[*]h"),
    Rule::Template(r"b[*.]tch"),
    Rule::Template(r"btc[*.]h"),
    Rule::Template(r"bit[*.]h"),
    Rule::Template(r"bi[*]{2}es"),
    Rule::Template(r"b[i1]+s+h+(?:es)?"),
    Rule::Template(r"b[*] sh"),
    Rule::Template(r"b{sep2}+s+h+(?:es)?"),
    Rule::Template(r"b(?:ei|ic)tc+h+e?s?"),
    Rule::Template(r"{spaced:bitch:es:sep5}"),
    Rule::Template(r"{spaced:bietch:es}"),
    Rule::Template(r"{spaced:bictch:es:sep5}"),
    Rule::Template(r"b{sep2}(?:i{sep2}|t)ch"),
    Rule::Template(r"(?:you little|son of a) b"),
    Rule::Template(r"bi tc"),
    Rule::Template(r"b[i!1][t+]ch(?:es)?"),
    Rule::Template(r"bitces"),
    Rule::Template(r"bi1?t1?ch"),
    Rule::Template(r"b+i+c+h+"),
    Rule::Template(r"b[i1l]tch"),
    Rule::Template(r"b\|7h"),
    Rule::Template(r"b\(\S+\)tch"),
    Rule::Template(r"\S*lilbetch\S*"),
    Rule::Template(r"(?:bl[o0]w|hoof|foot|hand|rim) ?jobs?"),
    Rule::Template(r"boners?"),
    Rule::Template(r"bone ?(?:me|you|him|her)"),
    Rule::Template(r"b[o0]{2,}b(?:i+e+[sz]|ie|s|z| ?jobs?)"),
    Rule::Template(r"b[o0]{2}b"),
    Rule::Template(r"b[. ]+o[. ]+o[. ]+b(?: s)?"),
    Rule::Template(r"butt ?plugs?"),
    Rule::Template(r"put+ in the butt"),
    Rule::Template(r"in the but+hole"),
    Rule::Template(r"bukake"),
    Rule::Template(r"ballsacks?"),
    Rule::Template(r"balls ?(?:deep|slapp?ing)"),
    Rule::Template(r"(?:sweaty|his|lick my|empty my) ?balls"),
    Rule::Template(r"my balls swell"),
    Rule::Template(r"(?:butt|arse) ?holes?"),
    Rule::Template(r"b[*]tthole"),
    Rule::Template(r"(?<!died of )can[cs]er+(?:s|ous)?(?! patient)"),
    Rule::Template(r"i hope you get (?:\S+ )?cancer?"),
    Rule::Template(r"(?<!died of ){spaced:cancer}(?! patient)"),
    Rule::Template(r"(?:horse|mare)?c\Scks?(?! gun)"),
    Rule::Template(r"c[o0][c<]k(?:socks?)?"),
    Rule::Template(r"{spaced:cock}"),
    Rule::Template(r"co[cq]ksuckers?"),
    Rule::Template(r"c[o0][ck]c"),
    Rule::Template(r"c{sep2}[ck]c"),
    Rule::Template(r"cockhead"),
    Rule::Template(r"his cok"),
    Rule::Template(r"condo[nm]"),
    Rule::Template(r"climaxe[ds]"),
    Rule::Template(r"(?:his|her|has a|hit my) climax"),
    Rule::Template(r"clit(?:o[*]?ris)?"),
    Rule::Template(r"clopp(?:ing|ers?)"),
    Rule::Template(r"(?:whale)?cum+(?:s|ing|ies)"),
    Rule::Template(r"cum ?(?:dump(?:sters?)?|buckets?|guzzl(?:ing|ers?)|soaken|stain|huge load)"),
    Rule::Template(r"cum (?:in(?:side)?|on) (?:your?|my|me|her)"),
    Rule::Template(r"cum (?:inside|outside|spewing|for me|harder|a ?lot|more|all|stain(?:s|ed)?|slave|on (?:yo)?ur|squirts|fills|deep|massive)"),
    Rule::Template(r"cum for(?!ç)"),
    Rule::Template(r"(?:m[ey]|your?|i|h+is|warm|makes? u|me to|g[ou]nna|to not|more|make her|please|daddys|stallion|will|they|can|swallows|salty|of|some|with|licks?|leaks|pls|in|from|sticky|the|her|its|spurt(?:s|ing)|(?:going|start(?:ed|s)?|ready|about|get|want) (?:t-)?to|what|yes|did|don'?t|let'?s|say|i'?ll|zebra|and) cum"),
    Rule::Template(r"cum cum"),
    Rule::Template(r"gonna c-cum"),
    Rule::Template(r"i camm+e+"),
    Rule::Template(r"c +u +m +(?:m +)+i +e +s"),
    Rule::Template(r"cumme[rd]"),
    Rule::Template(r"precum"),
    Rule::Template(r"c(?:[*._-]n|u[*._-]|n[*])ts*"),
    Rule::Template(r"{spaced:cunt:s}"),
    Rule::Template(r"cunt(?:bo[iy]s?|lord|muffin|bags?)"),
    Rule::Template(r"c{anyU}{anyN}t"),
    Rule::Template(r"c +{anyU} +{anyN} +t"),
    Rule::Template(r"c[.]unx?t"),
    Rule::Template(r"cvnts?"),
    Rule::Template(r"cxunt[sz]?"),
    Rule::Template(r"(?:d[a4]dd?y|(?:bite|poke) me|do it) harder"),
    Rule::Template(r"(?:(?:duck|rut) ?me|harder|oh ?yes|s-so big) ?d[a4]dd?[yi]"),
    Rule::Template(r"d[e3]{2}p ?throa[t7](?:ing|s|ed)?"),
    Rule::Template(r"(?:horse)?d[i!](?:<|{c})k+s?(?:wads?|suck(?:ing|ers?)?)?"),
    Rule::Template(r"d[i*71!]+[c*]k+(?:les|face)?"),
    Rule::Template(r"di\[k"),
    Rule::Template(r"dii+c+s?"),
    Rule::Template(r"di+ +i+c+k+"),
    Rule::Template(r"dic+s"),
    Rule::Template(r"dicc+"),
    Rule::Template(r"d[!?][(c]c"),
    Rule::Template(r"dcks"),
    Rule::Template(r"d[*] +ck"),
    Rule::Template(r"di[ck]+ ?hea?ds?"),
    Rule::Template(r"{spaced:dick:s}"),
    Rule::Template(r"{spaced:dicc:s}"),
    Rule::Template(r"limpdick"),
    Rule::Template(r"di?{sep}c[ck](?:s|heads?)?"),
    Rule::Template(r"di?{sep}+ks"),
    Rule::Template(r"dick(?:girls?|hole)"),
    Rule::Template(r"dikk"),
    Rule::Template(r"d *l *c *k"),
    Rule::Template(r"eat pee pee"),
    Rule::Template(r"(?:your|my) d in (?:your|my) p"),
    Rule::Template(r"suck (?:a|my) (?:d *i *c *k|d(?:ic)?)"),
    Rule::Template(r"(?:my|your) di[ck]"),
    Rule::Template(r"(?:my|your) d *e *k"),
    Rule::Template(r"dildo(?:sa?)?"),
    Rule::Template(r"dwildo"),
    Rule::Template(r"d +i +l +d +o"),
    Rule::Template(r"drink bleach"),
    Rule::Template(r"do me hard"),
    Rule::Template(r"ejaculat(?:e[sd]?|ing|ion)"),
    Rule::Template(r"f[a*]p(?:p?ing)?"),
    Rule::Template(r"f +a +p +p +i +n +g"),
    Rule::Template(r"{spaced:faps}"),
    Rule::Template(r"foalcon"),
    Rule::Template(r"{spaced:fagot:s}"),
    Rule::Template(r"{spaced:faggot:s}"),
    Rule::Template(r"fgt"),
    Rule::Template(r"f ag"),
    Rule::Template(r"dafag"),
    Rule::Template(r"(?:normal|brony|furry?|gay|horse|pony|nigg?er)?f[a@]g(?:s|g?[0oi]t(?:s|ry)?)?"),
    Rule::Template(r"f+a+g+s*"),
    Rule::Template(r"f[ae]ggets?"),
    Rule::Template(r"faguette"),
    Rule::Template(r"fxaggots?"),
    Rule::Template(r"fagatron"),
    Rule::Template(r"fa[*]{2,}ots?"),
    Rule::Template(r"f[a4][g69]{2,}[o0][t7]s"),
    Rule::Template(r"fist( me|ing)"),
    Rule::Template(r"fingering"),
];

/// The core profanity family, also probed on its own by `contains_core_profanity`.
pub const CORE_PROFANITY: &[Rule] = &[
    Rule::Template(r"shut ?the ?fuck ?up"),
    Rule::Template(r"(?:f[*]+|f[uy]ck|fuq|fvk) ?(?:ed|ers?|ing|face|you+|off+|u+|me|up|urself)"),
    Rule::Template(r"{spaced:fucking}"),
    Rule::Template(r"{spaced:fuckin}"),
    Rule::Template(r"{spaced:fucker:s}"),
    Rule::Template(r"{spaced:focker:s}"),
    Rule::Template(r"{spaced:fvck}"),
    Rule::Template(r"{spaced:fucc}"),
    Rule::Template(r"{spaced:fack}"),
    Rule::Template(r"f[u ]+[c ]+k"),
    Rule::Template(r"facken"),
    Rule::Template(r"fucc(?:e?n|d)"),
    Rule::Template(r"f[a4]ck[e3]d"),
    Rule::Template(r"f *u *c *c *s"),
    Rule::Template(r"fu[#$%&_]+(?:ed|ing)"),
    Rule::Template(r"f[#$%&_]cki[#$%&_]?ng"),
    Rule::Template(r"fuack"),
    Rule::Template(r"fuk+a"),
    Rule::Template(r"fukwad"),
    Rule::Template(r"dufuk"),
    Rule::Template(r"fux{2,}g"),
    Rule::Template(r"fxxx"),
    Rule::Template(r"g[ie]t fuk[td]"),
    Rule::Template(r"f[vu]+ck"),
    Rule::Template(r"fk +(?:ing|o *f *f)"),
    Rule::Template(r"f *k i *n *g"),
    Rule::Template(r"f *u *k *i *n *g"),
    Rule::Template(r"fu(?:[qk]s|vk|cj|kn)"),
    Rule::Template(r"fkc"),
    Rule::Template(r"fvkn?"),
    Rule::Template(r"fvcc"),
    Rule::Template(r"\S*f[uv]<k(?:ing|er)"),
    Rule::Template(r"ufck(?:ed|ing)?"),
    Rule::Template(r"fuck\S+"),
    Rule::Template(r"f{sep2}+uck"),
    Rule::Template(r"f[*] +ck"),
    Rule::Template(r"f ucj"),
    Rule::Template(r"f-?uckie"),
    Rule::Template(r"fuq[qk]ing?"),
    Rule::Template(r"fuqk"),
    Rule::Template(r"fuke up"),
    Rule::Template(r"fukd"),
    Rule::Template(r"fcng"),
    Rule::Template(r"fwu[ac]k"),
    Rule::Template(r"f x u x c x k"),
    Rule::Template(r"fuchs"),
    Rule::Template(r"f[ou]ke+n"),
    Rule::Template(r"fakiu"),
    Rule::Template(r"f- u"),
    Rule::Template(r"f *_+ *(k|u|everyone)"),
    Rule::Template(r"fu<k"),
    Rule::Template(r"f[.\[]u[.\]]k(?:you|me)?"),
    Rule::Template(r"uck m e"),
    Rule::Template(r"fu[*_.,-]+ing"),
    Rule::Template(r"the f (?:up|away|out)"),
    Rule::Template(r"fukbo[iy]"),
    Rule::Template(r"the(?:fuck|fuk|fuccin)"),
    Rule::Template(r"fuke me"),
    Rule::Template(r"fu[*\[]king"),
    Rule::Template(r"fu{sep2}?ccs?"),
    Rule::Template(r"fuc{sep2}ing"),
    Rule::Template(r"fu[0-9]ing"),
    Rule::Template(r"f{sep3}+(?:ng|ing|ed)"),
    Rule::Template(r"f{anyU} ?ck"),
    Rule::Template(r"Fu *sh *ck *it"),
    Rule::Template(r"f u [*] [*](?: i n g)?"),
    Rule::Template(r"flu+ck(?:ing?|er|s)?"),
    Rule::Template(r"flu+c?k(?:ing?|er|s)"),
    Rule::Template(r"f *o *c *k *i *n *g"),
    Rule::Template(r"fakk+(?:in|er)?"),
    Rule::Template(r"f00k(?:in|er)?"),
    Rule::Template(r"fy+c+king"),
    Rule::Template(r"(?:faq|f\.\.k) *(?:ing|er|this|dis|u|you|yoursel(?:f|ves))"),
    Rule::Template(r"(?:fyuck|fcuk)(?:ing|er)?"),
    Rule::Template(r"(?:brony|furry?|gay|horse|pony|nigg?er|butt|mother ?|mo|mutha|da|de)?f+[ou*8&%$#@]+[ck]+(?:ed|ers?|in[9g]?|able|faces?|balls?|toys?|ta+rds?|bo[iy]s?)?"),
    Rule::Template(r"m[o0]therf\S*"),
    Rule::Template(r"m[uao](?:th|d)?af[au]c?k(?:as?|in)?"),
    Rule::Template(r"moderfocke+r"),
    Rule::Template(r"mothertrucker"),
    Rule::Template(r"mother ?fukas"),
    Rule::Template(r"m[aou]tha fu(?:kas?)?"),
    Rule::Template(r"motha f"),
    Rule::Template(r"mdfcka"),
    Rule::Template(r"m[au]d[ai]f[au]c?kas?"),
    Rule::Template(r"f+.?ck+(?:s|ed|er|ng|ing?|ign)?"),
    Rule::Template(r"f.?u.?cking?"),
    Rule::Template(r"f{sep}+cking"),
    Rule::Template(r"fu{sep2}+k"),
    Rule::Template(r"f[u*]\[k(ing|er|s)?"),
    Rule::Template(r"f{sep2}{2,}ing"),
    Rule::Template(r"f{sep2}{2,}g"),
    Rule::Template(r"f{anyU}k"),
    Rule::Template(r"f +{anyU} +k"),
    Rule::Template(r"fuc[k*]i(?:ng|gn)\S+"),
    Rule::Template(r"fuc(?:lk?|ken)"),
    Rule::Template(r"foc(?:ki?-*ng?|uking)"),
    Rule::Template(r"fuci(?:kn|nk)g"),
    Rule::Template(r"fuxc*k(?:ing|er+)"),
    Rule::Template(r"fxuck"),
    Rule::Template(r"(?:mc)?f[zx]xk(?:er|ing)?"),
    Rule::Template(r"fucvk(?:ing)?"),
    Rule::Template(r"fuyck"),
    Rule::Template(r"fuvkers?"),
    Rule::Template(r"fuk+en"),
    Rule::Template(r"fukign"),
    Rule::Template(r"fooken"),
    Rule::Template(r"fking?"),
    Rule::Template(r"f+u+ic+k+"),
    Rule::Template(r"(?:fac+|f-k) (?:me|you|him|her|them|off)"),
    Rule::Template(r"fac{2,}"),
    Rule::Template(r"(?:fk|f uk)(?:er|ing)"),
    Rule::Template(r"fo+uo+co+k"),
    Rule::Template(r"f[ _]*u[ _]*c[ _]*c[ _]?k?(?:me|you)?"),
    Rule::Template(r"f *[^a-z ] *c *k(?: *e *r)?"),
    Rule::Template(r"f[*]+[kgrd]"),
    Rule::Template(r"(?:f+ ?k|ef+|fak|fek|fugk|fu|uck) (?:her|him|you|of+|out|me|urself|yourself)"),
    Rule::Template(r"(?:e+f+|f+k+) u+"),
    Rule::Template(r"f[u-]+ck(?:tard)?"),
    Rule::Template(r"(?:phack|phuck?)(?:ers?)?"),
    Rule::Template(r"f[.-]+ing"),
    Rule::Template(r"fq(?:er|ing)"),
    Rule::Template(r"(?:fak|fuq|fudge) (?:me|you|u)"),
    Rule::Template(r"fa{2,}k"),
    Rule::Template(r"(?:da)?fuqs?"),
    Rule::Template(r"daf+u+q+"),
    Rule::Template(r"f ?u [kq]"),
    Rule::Template(r"f+a+c+k+"),
    Rule::Template(r"f[_*]xk"),
    Rule::Template(r"f[0-9*._]u[0-9*._]ck"),
    Rule::Template(r"(?:go)?fukyou\S*"),
    Rule::Template(r"mcfuc[ck]ing?"),
    Rule::Template(r"mother fu?"),
    Rule::Template(r"what the fu?"),
    Rule::Template(r"phcking?"),
    Rule::Template(r"{spaced:fucking::sep5}"),
    Rule::Template(r"{spaced:fuced::sep5}"),
    Rule::Template(r"{spaced:fock::sep5}"),
    Rule::Template(r"{spaced:fuck::sep5}(?:you|me|ed)?"),
    Rule::Template(r"f[^a-z ]+king"),
    Rule::Template(r"f{anyU}{c}k(s|ing|ed)?"),
    Rule::Template(r"f +{anyU} +{c} +k(s|ing|ed)?"),
    Rule::Template(r"f[ .]+u[ .]+c"),
];

/// Rules following the core profanity family.
pub const PRIMARY_TAIL: &[Rule] = &[
    Rule::Template(r"gang ?bang(?:ed|ing)?"),
    Rule::Template(r"gtfo"),
    Rule::Template(r"get(?:ting)? laid"),
    Rule::Template(r"get \S+ laid"),
    Rule::Template(r"g-spot"),
    Rule::Template(r"laid (?:me|you|her|him|them) hard"),
    Rule::Template(r"lo[.]?lis?"),
    Rule::Template(r"h *{e} *n *t *{a} *i"),
    Rule::Template(r"h+e+n+t+[b-z]?a+i+"),
    Rule::Template(r"hentai[a-z]"),
    Rule::Template(r"hen[*-]ai"),
    Rule::Template(r"h[e*]nt[a*]i"),
    Rule::Template(r"henta+i+(?:s+|heaven|hero|commie|tale)?"),
    Rule::Template(r"h[ae4][i1]l ?h[i1]t+l(?:[e3]rs?|a)"),
    Rule::Template(r"ha?i hitler"),
    Rule::Template(r"h{o}[e3]s?"),
    Rule::Template(r"h[o0.]+{e}s"),
    Rule::Template(r"h[o0]+kers?"),
    Rule::Template(r"horn[*-]*y"),
    Rule::Template(r"humps?(?: (?:me|you)|ing)"),
    Rule::Template(r"i hope (?:your parents+|you|u) die"),
    Rule::Template(r"(?:i{anyN}|self)c[e3]st(?:uous)?"),
    Rule::Template(r"(?:jerk|j[a@]ck)(?:ing|s)? ?off"),
    Rule::Template(r"j +e +r +k +(?:s|i +n +g) +o +f +f"),
    Rule::Template(r"jerk(?:ing)? (?:you|u|him|them) off"),
    Rule::Template(r"jizz(?:ed|ing)?"),
    Rule::Template(r"jihad"),
    Rule::Template(r"kikes"),
    Rule::Template(r"kys"),
    Rule::Template(r"(?<!don't )(?<!dont )k[i1] ?ll (?:ur|y[o0]u?r) ?s[e3]l(?:f|ves)"),
    Rule::Template(r"lub(?:ing|ed|e)"),
    Rule::Template(r"marehood"),
    Rule::Template(r"mast[ue]rbat(?:e[ds]?|ion|ing)?"),
    Rule::Template(r"m[a4][s5]turb(?:ar|o|en?)"),
    Rule::Template(r"m *a *s *t *u *r *b *a *t *e *[ss]"),
    Rule::Template(r"m{anyO}an(?:s|ed|ing)?"),
    Rule::Template(r"molest(?:ation|ing|ering?|ed|s|ia)?"),
    Rule::Template(r"molistiah*"),
    Rule::Template(r"(?<!grammar )nazi(?:sts?|sm|s)?"),
    Rule::Template(r"(?<!grammar ){spaced:nazi}"),
    Rule::Template(r"necrophile?"),
    Rule::Template(r"negr0s"),
    Rule::Template(r"(?:black|stfu) negros?"),
    Rule::Template(r"negros? (?:be|die|are|is|everywhere)"),
    Rule::Template(r"negr[.]os"),
    Rule::Template(r"n[1i!*]?[g3]{2,}[eo]r[sz]?"),
    Rule::Template(r"n[1i!*](?:qg|gq)[e3]r[sz]?"),
    Rule::Template(r"n[1i!*]gg?r?[e3](?:rs?|st)?"),
    Rule::Template(r"niges+t+"),
    Rule::Template(r"n[1i!*](?:ggr|g+ah?|{b}{2}a)s?"),
    Rule::Template(r"ni{sep2}{2}a"),
    Rule::Template(r"n{sep2}(?:gg|bb)(?:as?|ers?)"),
    Rule::Template(r"n *i *g *g *e *s *t"),
    Rule::Template(r"nigg[sy]"),
    Rule::Template(r"niqqer"),
    Rule::Template(r"niggurs?"),
    Rule::Template(r"nig(?:ro|let)"),
    Rule::Template(r"{spaced:niger:s}"),
    Rule::Template(r"{spaced:nigger:s}"),
    Rule::Template(r"{spaced:nigga:s}"),
    Rule::Template(r"nig:[a-z]+:ger"),
    Rule::Template(r"ngigers?"),
    Rule::Template(r"niggars?"),
    Rule::Template(r"nigx?gx?ers?"),
    Rule::Template(r"nyggas?"),
    Rule::Template(r"neegah"),
    Rule::Template(r"n[i1]bbers?"),
    Rule::Template(r"n[i1][g69]{2,}([e3]r|a)s?"),
    Rule::Template(r"n [i1|] b b a"),
    Rule::Template(r"7igga"),
    Rule::Template(r"niqqas?"),
    Rule::Template(r"ni9{2,}ers?"),
    Rule::Template(r"nig a"),
    Rule::Template(r"nya?-?ggers?"),
    Rule::Template(r"knee+gur+"),
    Rule::Template(r"n0*i0*g0*g0*a"),
    Rule::Template(r"normies+"),
    Rule::Template(r"nudes"),
    Rule::Template(r"oral"),
    Rule::Template(r"orga[sz]m[so]?s?"),
    Rule::Template(r"urgazmo?z?"),
    Rule::Template(r"o+r+g+(?:y+|ies|{i}a)"),
    Rule::Template(r"piss(?:ing|face)?"),
    Rule::Template(r"p[e3*]n[i1][s$z](?:es)?"),
    Rule::Template(r"{spaced:penis}"),
    Rule::Template(r"p[e3]n[i1]s(?:[e3]h?s)?"),
    Rule::Template(r"p[e3]{2,}ns?"),
    Rule::Template(r"peepee"),
    Rule::Template(r"peenus"),
    Rule::Template(r"pengis"),
    Rule::Template(r"penius"),
    Rule::Template(r"b{e}nis"),
    Rule::Template(r"pee(?:bnis|ner)"),
    Rule::Template(r"p(?:ie|ea)ce of (?:shit|crap)"),
    Rule::Template(r"pneis"),
    Rule::Template(r"p[_*]nis"),
    Rule::Template(r"(?:hard|surprise) ?penetration"),
    Rule::Template(r"p[o0*]r[*]?no?"),
    Rule::Template(r"pr[o0]n"),
    Rule::Template(r"{spaced:porn}{rich:(?![ãÃóÓ])}"),
    Rule::Template(r"(?:child )?pornogra(?:fia|phy)"),
    Rule::Template(r"pound(?:ing)? (?:me|you|her|him|us)"),
    Rule::Template(r"prostitut[ae]s?"),
    Rule::Template(r"prostate"),
    Rule::Template(r"(?:octo|horse|pony|wet)?(?!puss ?in ?boots)pu+[s$5]{2,}(?:y+|ies+)?(?:juice)?"),
    Rule::Template(r"(?:horse|pony|boi)?pw?u[s$5]+(?:y|ies|i)(?:juice)?"),
    Rule::Template(r"horsephssuy"),
    Rule::Template(r"{spaced:pussy}"),
    Rule::Template(r"p{sep}ssy"),
    Rule::Template(r"p[_*][s$5]{2,}y"),
    Rule::Template(r"pyssy"),
    Rule::Template(r"pussy(?!cat|foot(?:ing)?)\S+"),
    Rule::Template(r"pu[s$_-]{2,}y"),
    Rule::Template(r"pussa[hy]"),
    Rule::Template(r"p{anyU}[s5]{2,}y"),
    Rule::Template(r"p[o0]{2,}s+ay"),
    Rule::Template(r"pus{2,}i"),
    Rule::Template(r"p[uv][sz$5]+y"),
    Rule::Template(r"poo+ *s+y"),
    Rule::Template(r"r[a@*]e?p(?:i[s$]ts?|ing|[e3](?:ists?|ing|s|d)?)"),
    Rule::Template(r"{spaced:rapes}"),
    Rule::Template(r"{spaced:rape:d}"),
    Rule::Template(r"{spaced:rapist:s}"),
    Rule::Template(r"r/+p(?:ed?|ists?)"),
    Rule::Template(r"r{sep2}pe[sd]?"),
    Rule::Template(r"r +a +p +i +n +g"),
    Rule::Template(r"r{sep2}?a{sep2}?p{sep2}?e(?:s|d|ing)?"),
    Rule::Template(r"rhap(?:es|ed?|ist|ing)"),
    Rule::Template(r"(?:eye|ass)rape"),
    Rule::Template(r"raep"),
    Rule::Template(r"r3pe"),
    Rule::Template(r"(?:rap[*]|repe) +(?:yu|you|u|me|us|her|him|them)"),
    Rule::Template(r"(?:wr|rw)ap(?:e|ists?)"),
    Rule::Template(r"grape noises"),
    Rule::Template(r"retard(?:s|ed|ads)?"),
    Rule::Template(r"{spaced:retard:s}"),
    Rule::Template(r"scr[e*]w(?:ing|ed)? (?:you|u|me|us|her|him|them|all)"),
    Rule::Template(r"(?:[sz]ieg|s[ae]ig|[sz]ig) ?h[ae]il"),
    Rule::Template(r"se[.]?men"),
    Rule::Template(r"sea ?men"),
    Rule::Template(r"cmen"),
    Rule::Template(r"send nu+des"),
    Rule::Template(r"sex(?: *slave| *abuser?)"),
    Rule::Template(r"(?:anal|butt|oral)?(?:[s$]ex+8?|secks|seks)"),
    Rule::Template(r"(?:anal|butt|oral) ?secs"),
    Rule::Template(r"s+[e3*&_]x+o*"),
    Rule::Template(r"s +[e*] +x"),
    Rule::Template(r"s *e *x"),
    Rule::Template(r"{spaced:sex::sep2}(?!{sep2}*y)"),
    Rule::Template(r"saex"),
    Rule::Template(r"sexe"),
    Rule::Template(r"have sax"),
    Rule::Template(r"sexual(?:ly)?"),
    Rule::Template(r"sax with e"),
    Rule::Template(r"stf ?[uv]+"),
    Rule::Template(r"s +t +f +u+"),
    Rule::Template(r"sc?hl?ongs?"),
    Rule::Template(r"(?:my|his) shaft"),
    Rule::Template(r"(?:bull|dip|oh|holy)?[s$]+h[i1*!]+e?t+(?:s|ing)?"),
    Rule::Template(r"s[*]+i?t"),
    Rule::Template(r"s[#■]it"),
    Rule::Template(r"(?:bull|dip)?shite(?! (?:iru|ageru|kudasai))"),
    Rule::Template(r"shite?(?:heads?|faced?)"),
    Rule::Template(r"shit(?:head|stain|lord)"),
    Rule::Template(r"s+h[ie#]t"),
    Rule::Template(r"s#{2,}t"),
    Rule::Template(r"shjet"),
    Rule::Template(r"sh{sep2}t"),
    Rule::Template(r"s{anyH}[i!|][t7]s?"),
    Rule::Template(r"s +{anyH} +[i!|] +[t7]s?"),
    Rule::Template(r"holy ?shee+t"),
    Rule::Template(r"shitt+y"),
    Rule::Template(r"s[0-9]?h[0-9]?i[0-9]?t[0-9]?s?"),
    Rule::Template(r"shxit"),
    Rule::Template(r"shota"),
    Rule::Template(r"sl[u#*]t(?:s|ty)?"),
    Rule::Template(r"{spaced:slut:s}"),
    Rule::Template(r"s(?:;l|l;)ut"),
    Rule::Template(r"s[*]ut"),
    Rule::Template(r"s{anyL}{anyU}t"),
    Rule::Template(r"s+p+e+r+m+a*"),
    Rule::Template(r"spank me"),
    Rule::Template(r"spicks"),
    Rule::Template(r"spunk"),
    Rule::Template(r"sucks? dic?k"),
    Rule::Template(r"(c[o0]ck)?s *u *c *k(?:ing|er)"),
    Rule::Template(r"c[o0]ck *s *u *c *k(?:ing|er)?"),
    Rule::Template(r"sucks (?:balls|dic|harder|deeper)"),
    Rule::Template(r"(?<!it )(?<!that )(?<!this )(?<!which )(?<!school ){spaced:suck:s:sep5}(?! (?:(?:the )?blood|(?:(?:his|her|my|their) )?neck|at ))"),
    Rule::Template(r"{spaced:succ:s:sep5}"),
    Rule::Template(r"sukks?"),
    Rule::Template(r"suk my"),
    Rule::Template(r"su[(<\[]k"),
    Rule::Template(r"s *[u*] *c *cs?"),
    Rule::Template(r"s{anyU}+c{2,}s?"),
    Rule::Template(r"s\|_\|+c{anyK}s?"),
    Rule::Template(r"s{anyU}+c\|<s?"),
    Rule::Template(r"s +{anyU} +< +ks?"),
    Rule::Template(r"su[c<]{2,}(?:ed|ing)"),
    Rule::Template(r"s[*]cks"),
    Rule::Template(r"su+[i|]?[c<]ide"),
    Rule::Template(r"suic[*]+de"),
    Rule::Template(r"tampon"),
    Rule::Template(r"testicles"),
    Rule::Template(r"the kkk"),
    Rule::Template(r"t[_ ]+{anyH}[_ ]+o[_ ]+t([_ ]+s)?"),
    Rule::Template(r"t *\|-\| *[o0] *t"),
    Rule::Template(r"th0ts?"),
    Rule::Template(r"th{sep}+ot"),
    Rule::Template(r"th:ots"),
    Rule::Template(r"thotties"),
    Rule::Template(r"sup thots?"),
    Rule::Template(r"thrusts? into (?:her|him)"),
    Rule::Template(r"tit(?:s|ty|ties?)"),
    Rule::Template(r"t\[i\]i?ts"),
    Rule::Template(r"tiddies"),
    Rule::Template(r"t i t s(?! [a-z] )"),
    Rule::Template(r"t *{i} *[td] *[td] *{i} *e *s"),
    Rule::Template(r"tranny"),
    Rule::Template(r"touch my d"),
    Rule::Template(r"wank(?:ing|e+r[sz]?)?"),
    Rule::Template(r"wh[o0*]re+s?"),
    Rule::Template(r"w\Shore"),
    Rule::Template(r"w *h *o *r *es?"),
    Rule::Template(r"whorae"),
    Rule::Template(r"w{anyH}{anyO}res?"),
    Rule::Template(r"w +{anyH} +{anyO} +r +es?"),
    Rule::Template(r"austic hore"),
    Rule::Template(r"{spaced:vagina:s}"),
    Rule::Template(r"v[*]gina"),
    Rule::Template(r"vag[*]na"),
    Rule::Template(r"vaginales"),
    Rule::Template(r"vagina[a-z]"),
    Rule::Template(r"vagin[ig]a"),
    Rule::Template(r"(?:my|your|her) vag(?:ina)?"),
    Rule::Template(r"[vb]aginal"),
    Rule::Template(r"vagbo[iy]s?"),
    Rule::Template(r"vibra[td]or(s|ima|om|es?)?"),
    Rule::Template(r"v{anyO}r(?:e[sd]?|ing)"),
    Rule::Template(r"v[.-]?o[.-]?r[.-]?e"),
    Rule::Template(r"vulva"),
    Rule::Template(r"(?:white|wyte) ?(?:power|supremacy)"),
    Rule::Template(r"yiff(?:s|ing|ed|ers?|u)?"),
    Rule::Template(r"y i f f"),
    Rule::Template(r"zo[o*]+(?:f|ph)ili(?:a+h?|cos)"),
    Rule::Template(r"black ?supremacy"),
    Rule::Template(r"(?:gas|kill)(?: (?:the|some|their))? jews?"),
    Rule::Template(r"jews? burning"),
    Rule::Template(r"x *v *i *d *e *o *s"),
    Rule::Template(r"alt ?(?:[+-] ?)?f4"),
    Rule::Template(r"(?:ctrl|control) ?[+-]? ?w"),
    Rule::Template(r"touch +my +pp"),
    Rule::Template(r"(?:my|your) dix"),
    Rule::Template(r"(?:my|your) +p *p"),
    Rule::Template(r"lick my pencil"),
    Rule::Template(r"shoves? (?:my|your|his|her) horn into (?:me|you|him|her|them)"),
    Rule::Template(r"rub my nipples?"),
    Rule::Template(r"nekoi hui"),
    Rule::Template(r"hoer"),
    Rule::Template(r"estupra"),
    Rule::Template(r"filho da puta"),
    Rule::Template(r"caralho+"),
    Rule::Template(r"pu?ta madr?e"),
    Rule::Template(r"p+[uv*]+t+a+[sh]?"),
    Rule::Template(r"p[uv]+tazoh?"),
    Rule::Template(r"p{sep2}?u{sep2}?t{sep2}?ah*"),
    Rule::Template(r"p +u +t +a"),
    Rule::Template(r"p[v¡]to"),
    Rule::Template(r"putaria+"),
    Rule::Template(r"ptazos"),
    Rule::Template(r"p+o+rr+a+"),
    Rule::Template(r"vadia"),
    Rule::Template(r"malditos"),
    Rule::Template(r"fud(?:er|ido)"),
    Rule::Template(r"foda[ =-]?[sc]e+h?"),
    Rule::Template(r"se fode"),
    Rule::Template(r"f o d a - s e"),
    Rule::Template(r"fodac?"),
    Rule::Template(r"fodaci"),
    Rule::Template(r"se fude(?:r|u)?"),
    Rule::Template(r"m[e3]rdas?"),
    Rule::Template(r"chupa+r? (?:me[ou]|minha|seu|su|mi) (?:p[{pt_a}4][ou]h?|rola|miembro|polla|pal)"),
    Rule::Template(r"chupa+r? *(tampones|pollas)"),
    Rule::Template(r"chupa(?:le|ndo) ?(?:la ?)?(?:tetas|punta)"),
    Rule::Template(r"t3t4s"),
    Rule::Template(r"chup(?:a|a[rs]|enle) ?(?:el ?)?(?:ano|orto)"),
    Rule::Template(r"(?:lo )?chupa (?:a (?:minha|salsicha)|r[{es_a}]pido|entero)"),
    Rule::Template(r"chupale ?mejor"),
    Rule::Template(r"chupamela"),
    Rule::Template(r"lo chupa"),
    Rule::Template(r"chupando (?:a salsicha|forte|m[{es_a}]s fuerte)"),
    Rule::Template(r"meu pau"),
    Rule::Template(r"soplame(?: el)?(?: pito)?"),
    Rule::Template(r"sexo+"),
    Rule::Template(r"penetra+ fort(?:e|ao)"),
    Rule::Template(r"do pau dele"),
    Rule::Template(r"cima do pau"),
    Rule::Template(r"tocar no pau"),
    Rule::Template(r"lamber meu rabo"),
    Rule::Template(r"ca[zx]{2,}[o0i]+"),
    Rule::Template(r"c[a*4]+r[a4]jo"),
    Rule::Template(r"coje rejalo"),
    Rule::Template(r"c[o0]j[e3]r(?:conmi|h+)?"),
    Rule::Template(r"chingar?(?: tu madre)?"),
    Rule::Template(r"chingados"),
    Rule::Template(r"chup(?:o|ando) (?:fuerte )?tu pe[sz][{es_o}]n"),
    Rule::Template(r"chupo con fuerza"),
    Rule::Template(r"chupo(?: mas)? rapido"),
    Rule::Template(r"sigue chupando"),
    Rule::Template(r"cule(?:ro|ar)"),
    Rule::Template(r"f[o0]ll[.]?[a4](?:r(?:[ms]eh?)?|mos|da|s)?"),
    Rule::Template(r"gilipollas"),
    Rule::Template(r"hij[ao]s? de? pt[ao]"),
    Rule::Template(r"inbesil"),
    Rule::Template(r"jop[uv]tas"),
    Rule::Template(r"j[o0]d[a4]+s"),
    Rule::Template(r"j[o0]d[e3a4]r"),
    Rule::Template(r"j[o0]dier[o0]n"),
    Rule::Template(r"mi[e3]rda+h*"),
    Rule::Template(r"tu miembro"),
    Rule::Template(r"mrda"),
    Rule::Template(r"matate"),
    Rule::Template(r"mereces morir"),
    Rule::Template(r"n[oi] mereces vivir"),
    Rule::Template(r"n[e3]pes?h*"),
    Rule::Template(r"maric[o0]n"),
    Rule::Template(r"p[uvw#*.]t[ao][zhs]*"),
    Rule::Template(r"pollas"),
    Rule::Template(r"pvtaso"),
    Rule::Template(r"pu[.]?t[ao]"),
    Rule::Template(r"puti[.]?ta"),
    Rule::Template(r"p[uv]t[a4](madre|kos)"),
    Rule::Template(r"p[t7][ao]"),
    Rule::Template(r"pij[.]?a"),
    Rule::Template(r"se le corre"),
    Rule::Template(r"sou foda"),
    Rule::Template(r"suicidat"),
    Rule::Template(r"violando(?! la)"),
    Rule::Template(r"v1{o}l[eo]"),
    Rule::Template(r"[vb][i1]{o}l[a4]r"),
    Rule::Template(r"vi0lare"),
    Rule::Template(r"[vb]1{o}laci{o}nes"),
    Rule::Template(r"violo a"),
    Rule::Template(r"la viole"),
    Rule::Template(r"la mete"),
    Rule::Template(r"lamer la punta"),
    Rule::Template(r"[bv]ete ?a ?la ?[bv]erga?"),
    Rule::Template(r"v[e3]?rga"),
    Rule::Template(r"zemen+"),
    Rule::Template(r"zorra"),
    Rule::Template(r"arrap(?:at[eiao]|ano|are|[oi])"),
    Rule::Template(r"bagasci[ae]"),
    Rule::Template(r"baldracc(?:a|he)"),
    Rule::Template(r"bastard[eiao]"),
    Rule::Template(r"bocchin(?:[io]|ar[ae])"),
    Rule::Template(r"bordello"),
    Rule::Template(r"butt[ao]n[ae]"),
    Rule::Template(r"cagna"),
    Rule::Template(r"cagare"),
    Rule::Template(r"k[a4]g[a4]r"),
    Rule::Template(r"caghi(?:amo)?"),
    Rule::Template(r"caga(?:no|te)"),
    Rule::Template(r"cazz(?:on[iae]|at[ea])"),
    Rule::Template(r"checc(?:a|he)"),
    Rule::Template(r"chiav(?:o|are)"),
    Rule::Template(r"chia?[bv]at[ae]"),
    Rule::Template(r"c[o0]glion[aie]"),
    Rule::Template(r"cortigian[ae]"),
    Rule::Template(r"culatton[ie]"),
    Rule::Template(r"ditalin[io]"),
    Rule::Template(r"ebet[ie]"),
    Rule::Template(r"eiacul(?:i|o|are|azione)"),
    Rule::Template(r"(?:vaf)?fanculo"),
    Rule::Template(r"fanculizzati"),
    Rule::Template(r"fotte(?:te[lvm]i|re)"),
    Rule::Template(r"fott[io](?:[tm]i|l[oaie])?"),
    Rule::Template(r"fottut[aeio]"),
    Rule::Template(r"frocio?"),
    Rule::Template(r"fregna"),
    Rule::Template(r"gigolo"),
    Rule::Template(r"gnocc(?:he|a)"),
    Rule::Template(r"handicappat[aeio]"),
    Rule::Template(r"la figa"),
    Rule::Template(r"negraccio"),
    Rule::Template(r"perra+"),
    Rule::Template(r"pirla"),
    Rule::Template(r"p[e3]l[o0][t7]ud(a|o|ito)"),
    Rule::Template(r"p[e3]?n[.]?dej(a+|o+h?s?)"),
    Rule::Template(r"p[e3]nej(a+|o+h?s?)"),
    Rule::Template(r"poll[.]*as"),
    Rule::Template(r"pompin(?:[io]|ar[ieao])"),
    Rule::Template(r"puth?[o0]s*"),
    Rule::Template(r"putada"),
    Rule::Template(r"puttan(?:[ae]+s?|at[ae])"),
    Rule::Template(r"prostitu(?:irsi|zione)"),
    Rule::Template(r"scopa(?:ndo|mi)"),
    Rule::Template(r"incazza(?:t[aeio]|rsi)"),
    Rule::Template(r"incul(?:o|i(?:amo)?|a(?:rti|li|lo|la|no|te|re)?)"),
    Rule::Template(r"lecc(?:hin[io]|acul[io])"),
    Rule::Template(r"masturb(?:[ai]h?|alo|ami|are|arsi|azione|ate(?:li|vi)|iamol[oi]|iamoci|ando|as)"),
    Rule::Template(r"merdos[ao]"),
    Rule::Template(r"meretric[ie]"),
    Rule::Template(r"mignott[ae]"),
    Rule::Template(r"minchi(?:[ae]|at[ae]|on[iea])"),
    Rule::Template(r"masturbarmi"),
    Rule::Template(r"rompi(?:palle|coglioni)"),
    Rule::Template(r"ricchion[ie]"),
    Rule::Template(r"rincoglionit[ieao]"),
    Rule::Template(r"sborr(?:o|a|ano|ate|i|iamo|are)"),
    Rule::Template(r"sburro"),
    Rule::Template(r"scopal[ao]"),
    Rule::Template(r"scopar[tm]i"),
    Rule::Template(r"scassacazz[io]"),
    Rule::Template(r"sesso+"),
    Rule::Template(r"sessuale"),
    Rule::Template(r"segaiol[io]"),
    Rule::Template(r"sfott(?:[io]|ere)"),
    Rule::Template(r"sgualdrin[ae]"),
    Rule::Template(r"spomipina"),
    Rule::Template(r"spompina(no|re)"),
    Rule::Template(r"stupratore"),
    Rule::Template(r"sputtan[ai](?:l[io]|no|amo|t[aeio]|re)?"),
    Rule::Template(r"sputtaniamol[oi]"),
    Rule::Template(r"stronz[eaio]"),
    Rule::Template(r"stronzat[ae]"),
    Rule::Template(r"stupro"),
    Rule::Template(r"zoccol[ae]"),
    Rule::Template(r"(?<!la )pene"),
    Rule::Template(r"el pne"),
    Rule::Template(r"vagine"),
    Rule::Template(r"troi[ae](?:io|h)?"),
    Rule::Template(r"trombare"),
    Rule::Template(r"tromb[io]"),
    Rule::Template(r"trombate"),
    Rule::Template(r"trombano"),
    Rule::Template(r"trombal[ao]"),
    Rule::Template(r"trombiamo(?:l[eiao])?"),
    Rule::Template(r"perkele"),
    Rule::Template(r"vittu"),
    Rule::Template(r"(?:fils de )?pute"),
    Rule::Template(r"pute(?:u+h+)?"),
    Rule::Template(r"merde"),
    Rule::Template(r"fitta"),
    Rule::Template(r"arsch"),
    Rule::Template(r"fotzen?"),
    Rule::Template(r"schei{ss}\S+"),
    Rule::Template(r"(?:[gb]e)?schissen"),
    Rule::Template(r"(?:[gb]e)?(?:wichs|kack|fick)(?:est|en|et|e|test|te|t|st)"),
    Rule::Template(r"(?:[gb]e)?(?:piss)(?:est|en|et|test|te)"),
    Rule::Template(r"hurens(?:oe|[{de_o}])hne?"),
    Rule::Template(r"huren"),
    Rule::Template(r"schlampen?"),
    Rule::Template(r"schwuchteln?"),
    Rule::Template(r"neger"),
    Rule::Template(r"wichser?"),
    Rule::Template(r"wixxer?"),
    Rule::Template(r"verpiss ?dich"),
    Rule::Template(r"verdammter"),
    Rule::Template(r"m[ea]in ?kampf"),
    Rule::Template(r"lutsch meinen schwanz"),
    Rule::Template(r"9/11"),
    Rule::Template(r"against (?:her|his|your) insides"),
    Rule::Template(r"creamy load"),
    Rule::Template(r"empty my load"),
    Rule::Template(r"cherry got popped"),
    Rule::Template(r"into (?:her|your) (?:cervix|uterus)"),
    Rule::Template(r"tight cervix"),
    Rule::Template(r"(?:my|his|her|your) crotch"),
    Rule::Template(r"panting heav(?:il)?y"),
    Rule::Template(r"pegs her"),
    Rule::Template(r"penetrat(?:es?|ing) (?:him|her|you|your)"),
    Rule::Template(r"put(?:s|t?ing) (?:it|that) in (?:your|my|his|her) mouth"),
    Rule::Template(r"pounds? (?:against|her|deeper)"),
    Rule::Template(r"pump(?:ing)? my (?:large )?(?:seed|load)"),
    Rule::Template(r"pushes (?:my tongue|deeper inside)"),
    Rule::Template(r"pushing deep"),
    Rule::Template(r"prodding my tip"),
    Rule::Template(r"gets it inside"),
    Rule::Template(r"goes (?:harder and |in )?deeper"),
    Rule::Template(r"groans and th?rusts"),
    Rule::Template(r"grabs her breasts?"),
    Rule::Template(r"grinding her"),
    Rule::Template(r"(?:starts|keeps|begins) thrusting"),
    Rule::Template(r"thrusting (?:her|his|him|(?:even )?harder)"),
    Rule::Template(r"thrusts? (?:slightly )?(?:deep|hard)(?:er)?"),
    Rule::Template(r"thrusts? (?:my tongue|against)"),
    Rule::Template(r"tongue inside"),
    Rule::Template(r"(?:thick|my) hot load"),
    Rule::Template(r"thick and creamy"),
    Rule::Template(r"tight walls"),
    Rule::Template(r"fast and (?:hard|deep)"),
    Rule::Template(r"forcing every inch inside"),
    Rule::Template(r"hard and deep"),
    Rule::Template(r"her slit"),
    Rule::Template(r"(?:her|his) nether regions?"),
    Rule::Template(r"faster and (?:deeper|harder)"),
    Rule::Template(r"fully erect"),
    Rule::Template(r"deeper and harder"),
    Rule::Template(r"harder and (?:harder|faster|rougher|deeper)"),
    Rule::Template(r"filling her up"),
    Rule::Template(r"(?:his|my) knot"),
    Rule::Template(r"(?:her|your) (?:wombs?|wet cave|wet tunnel)"),
    Rule::Template(r"her plothole"),
    Rule::Template(r"kisses (?:him|her) lewdly"),
    Rule::Template(r"womb with his"),
    Rule::Template(r"(?:he|gently) thrusts"),
    Rule::Template(r"(?:sticky )?(?:hot|warm) loads?"),
    Rule::Template(r"hot seed"),
    Rule::Template(r"seed into her"),
    Rule::Template(r"mare juices?"),
    Rule::Template(r"milk(?:ed|ing) him"),
    Rule::Template(r"my fluids"),
    Rule::Template(r"makes (?:you|u) squirt"),
    Rule::Template(r"(?:his|your|my) (?:huge )?member"),
    Rule::Template(r"pushes member (?:inside|into her)"),
    Rule::Template(r"inside of her(?! mind)"),
    Rule::Template(r"(?<!hold me )(?<!hugs )(?<!it's )(?<!its )so tight"),
    Rule::Template(r"fingers (?:inside )?her"),
    Rule::Template(r"release my (?:heavy )?load"),
    Rule::Template(r"rubs? her area"),
    Rule::Template(r"screams in pleasure"),
    Rule::Template(r"slides it in and out"),
    Rule::Template(r"shoves (?:my tongue|the rest in)"),
    Rule::Template(r"shoots out jizz?"),
    Rule::Template(r"starts? (?:pounding|thrusting)"),
    Rule::Template(r"sticks tongue in"),
    Rule::Template(r"squirts on (?:your|his|her) face"),
    Rule::Template(r"spreads her legs"),
    Rule::Template(r"spraying (?:your|his|her) insides"),
    Rule::Template(r"t-tight"),
    Rule::Template(r"tailhole"),
    Rule::Template(r"throbbing hard"),
    Rule::Template(r"with each thrust"),
    Rule::Template(r"your dirty hole"),
    Rule::Template(r"you're so wet"),
    Rule::Template(r"pidor[sy]?"),
    Rule::Template(r"pizdec+\S?"),
    Rule::Template(r"huinya"),
    Rule::Template(r"kurva"),
    Rule::Template(r"blyad"),
    Rule::Template(r"bliat"),
];
